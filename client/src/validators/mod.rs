// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gatehouse_shared::validation::Password;

pub mod field;

/// Where one signup field currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldStatus {
	/// Nothing is known about the current value; no message is shown.
	#[default]
	Idle,
	/// A check for the current value hasn't resolved yet, so any earlier
	/// message no longer applies.
	Pending,
	/// The value was accepted.
	Ok,
	/// The value is malformed. The message, if any, says why.
	Invalid(Option<String>),
	/// The value is well-formed but already belongs to another account.
	Unavailable,
}

impl FieldStatus {
	/// Classifies an availability response by its HTTP status code.
	///
	/// Codes outside the known set mean the check didn't produce an answer for
	/// this value, which is indistinguishable from never having asked.
	pub fn from_check(code: u16, error_message: Option<String>) -> Self {
		match code {
			200 => Self::Ok,
			400 => Self::Invalid(error_message),
			409 => Self::Unavailable,
			_ => Self::Idle,
		}
	}

	pub fn is_ok(&self) -> bool {
		matches!(self, Self::Ok)
	}
}

/// Maps the current password text to a status using the shared strength rules.
///
/// Runs locally, so the status updates on every keystroke with no delay.
pub fn password_strength_status(password: &str) -> FieldStatus {
	if password.is_empty() {
		return FieldStatus::Idle;
	}
	match password.parse::<Password>() {
		Ok(_) => FieldStatus::Ok,
		Err(reason) => FieldStatus::Invalid(Some(String::from(reason))),
	}
}

/// Whether the form may be submitted: every field must have been accepted.
///
/// Pending counts as not accepted, so a submit can't race a check that might
/// still come back negative.
pub fn submission_allowed(username: &FieldStatus, password: &FieldStatus, email: &FieldStatus) -> bool {
	username.is_ok() && password.is_ok() && email.is_ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classifies_availability_codes() {
		assert_eq!(FieldStatus::from_check(200, None), FieldStatus::Ok);
		assert_eq!(
			FieldStatus::from_check(400, Some(String::from("username contains invalid characters"))),
			FieldStatus::Invalid(Some(String::from("username contains invalid characters")))
		);
		assert_eq!(FieldStatus::from_check(400, None), FieldStatus::Invalid(None));
		assert_eq!(FieldStatus::from_check(409, None), FieldStatus::Unavailable);
		assert_eq!(FieldStatus::from_check(302, None), FieldStatus::Idle);
		assert_eq!(FieldStatus::from_check(500, None), FieldStatus::Idle);
	}

	#[test]
	fn submission_requires_every_field_accepted() {
		let statuses = || {
			[
				FieldStatus::Idle,
				FieldStatus::Pending,
				FieldStatus::Ok,
				FieldStatus::Invalid(None),
				FieldStatus::Invalid(Some(String::from("username is taken"))),
				FieldStatus::Unavailable,
			]
		};
		for username in statuses() {
			for password in statuses() {
				for email in statuses() {
					let expected = username == FieldStatus::Ok
						&& password == FieldStatus::Ok
						&& email == FieldStatus::Ok;
					assert_eq!(
						submission_allowed(&username, &password, &email),
						expected,
						"gate disagreed for {:?}/{:?}/{:?}",
						username,
						password,
						email
					);
				}
			}
		}
	}

	#[test]
	fn submission_check_is_stable() {
		let ok = FieldStatus::Ok;
		let pending = FieldStatus::Pending;
		assert_eq!(
			submission_allowed(&ok, &pending, &ok),
			submission_allowed(&ok, &pending, &ok)
		);
	}

	#[test]
	fn password_status_follows_strength_rules() {
		assert_eq!(password_strength_status(""), FieldStatus::Idle);
		assert_eq!(
			password_strength_status("abc"),
			FieldStatus::Invalid(Some(String::from("password must be at least 8 characters")))
		);
		assert_eq!(password_strength_status("Abc123!@"), FieldStatus::Ok);
	}
}
