// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::FieldStatus;
use crate::requests::{self, AvailabilityReply, RequestError};
use gatehouse_shared::validation::{Email, Username};
use std::cell::Cell;
use std::rc::Rc;
use sycamore::prelude::*;

/// Identifies one check so its result can be told apart from the result of a
/// check that superseded it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CheckTicket(u64);

/// Tracks one field's status along with the bookkeeping that keeps delayed
/// check results from clobbering newer ones.
///
/// Every result goes through [`complete_check`](Self::complete_check) with the
/// ticket minted when its check began; results holding a superseded ticket are
/// discarded. Clones share the same status and ticket counter, so a clone can
/// be moved into a timer or task closure.
#[derive(Clone)]
pub struct FieldValidator {
	pub status: RcSignal<FieldStatus>,
	check_seq: Rc<Cell<u64>>,
}

impl FieldValidator {
	pub fn new() -> Self {
		Self {
			status: create_rc_signal(FieldStatus::Idle),
			check_seq: Rc::new(Cell::new(0)),
		}
	}

	/// Starts a new check generation for the current input.
	///
	/// The status becomes Pending right away so a stale message never lingers
	/// while the check is in flight.
	pub fn begin_check(&self) -> CheckTicket {
		self.status.set(FieldStatus::Pending);
		CheckTicket(self.advance())
	}

	/// Applies a check outcome unless a newer check superseded it.
	///
	/// Returns whether the outcome was applied.
	pub fn complete_check(&self, ticket: CheckTicket, status: FieldStatus) -> bool {
		if ticket.0 != self.check_seq.get() {
			return false;
		}
		self.status.set(status);
		true
	}

	/// Returns the field to Idle and supersedes any in-flight check.
	///
	/// Used when the input empties: an empty field shows no message.
	pub fn clear(&self) {
		self.advance();
		self.status.set(FieldStatus::Idle);
	}

	/// Supersedes any in-flight check without touching the status.
	///
	/// Used at teardown, when nothing will read the status again but a check
	/// result may still arrive.
	pub fn invalidate(&self) {
		self.advance();
	}

	fn advance(&self) -> u64 {
		let next = self.check_seq.get() + 1;
		self.check_seq.set(next);
		next
	}
}

/// Which availability-checked field a check belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AvailabilityField {
	Username,
	Email,
}

impl AvailabilityField {
	pub fn name(self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Email => "email",
		}
	}

	fn validate(self, value: &str) -> Result<(), &'static str> {
		match self {
			Self::Username => value.parse::<Username>().map(|_| ()),
			Self::Email => value.parse::<Email>().map(|_| ()),
		}
	}

	async fn check_remote(self, value: &str) -> Result<AvailabilityReply, RequestError> {
		match self {
			Self::Username => requests::check_username_availability(value).await,
			Self::Email => requests::check_email_availability(value).await,
		}
	}
}

/// Resolves one availability check: local format rules first, then the server.
///
/// A value that fails the local rules produces Invalid without a request. A
/// transport failure produces Idle, since nothing was learned about the value.
/// Either way the outcome is applied through the ticket, so a result for input
/// the user has since changed is dropped.
pub async fn run_availability_check(validator: FieldValidator, ticket: CheckTicket, field: AvailabilityField, value: String) {
	if let Err(reason) = field.validate(&value) {
		validator.complete_check(ticket, FieldStatus::Invalid(Some(String::from(reason))));
		return;
	}
	let status = match field.check_remote(&value).await {
		Ok(reply) => FieldStatus::from_check(reply.code, reply.error_message),
		Err(error) => {
			log::debug!("The {} availability check didn't complete: {}", field.name(), error);
			FieldStatus::Idle
		}
	};
	if !validator.complete_check(ticket, status) {
		log::debug!("Discarded a stale {} availability result", field.name());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn beginning_a_check_marks_the_field_pending() {
		let validator = FieldValidator::new();
		assert_eq!(*validator.status.get(), FieldStatus::Idle);
		validator.begin_check();
		assert_eq!(*validator.status.get(), FieldStatus::Pending);
	}

	#[test]
	fn a_newer_check_supersedes_an_older_result() {
		let validator = FieldValidator::new();
		let first = validator.begin_check();
		let second = validator.begin_check();

		assert!(validator.complete_check(second, FieldStatus::Unavailable));
		assert!(!validator.complete_check(first, FieldStatus::Ok));
		assert_eq!(*validator.status.get(), FieldStatus::Unavailable);
	}

	#[test]
	fn a_stale_result_is_dropped_even_before_the_newer_one_lands() {
		let validator = FieldValidator::new();
		let first = validator.begin_check();
		let second = validator.begin_check();

		assert!(!validator.complete_check(first, FieldStatus::Ok));
		assert_eq!(*validator.status.get(), FieldStatus::Pending);
		assert!(validator.complete_check(second, FieldStatus::Ok));
		assert_eq!(*validator.status.get(), FieldStatus::Ok);
	}

	#[test]
	fn only_the_latest_of_a_burst_applies() {
		let validator = FieldValidator::new();
		let tickets: Vec<CheckTicket> = (0..5).map(|_| validator.begin_check()).collect();

		for stale in &tickets[..4] {
			assert!(!validator.complete_check(*stale, FieldStatus::Ok));
		}
		assert!(validator.complete_check(tickets[4], FieldStatus::Unavailable));
		assert_eq!(*validator.status.get(), FieldStatus::Unavailable);
	}

	#[test]
	fn clearing_resets_the_status_and_supersedes_checks() {
		let validator = FieldValidator::new();
		let ticket = validator.begin_check();
		validator.clear();

		assert_eq!(*validator.status.get(), FieldStatus::Idle);
		assert!(!validator.complete_check(ticket, FieldStatus::Unavailable));
		assert_eq!(*validator.status.get(), FieldStatus::Idle);
	}

	#[test]
	fn invalidating_discards_results_without_writing_the_status() {
		let validator = FieldValidator::new();
		let ticket = validator.begin_check();
		validator.invalidate();

		assert!(!validator.complete_check(ticket, FieldStatus::Ok));
		assert_eq!(*validator.status.get(), FieldStatus::Pending);
	}

	#[test]
	fn clones_share_state() {
		let validator = FieldValidator::new();
		let clone = validator.clone();
		let ticket = validator.begin_check();

		assert!(clone.complete_check(ticket, FieldStatus::Ok));
		assert_eq!(*validator.status.get(), FieldStatus::Ok);
	}
}
