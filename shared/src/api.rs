// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON body the server attaches to a rejected request.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ErrorBody {
	pub error: String,
}

/// Raw field values submitted when creating an account.
///
/// The values are sent as typed, not as parsed newtypes; the server revalidates
/// everything itself.
#[derive(Clone, Deserialize, Serialize)]
pub struct SignupForm {
	pub username: String,
	pub password: String,
	pub email: String,
}

impl fmt::Debug for SignupForm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SignupForm")
			.field("username", &self.username)
			.field("password", &"***")
			.field("email", &self.email)
			.finish()
	}
}

/// Raw field values submitted when logging in.
#[derive(Clone, Deserialize, Serialize)]
pub struct LoginForm {
	pub username: String,
	pub password: String,
	pub remember: bool,
}

impl fmt::Debug for LoginForm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LoginForm")
			.field("username", &self.username)
			.field("password", &"***")
			.field("remember", &self.remember)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_body_reads_the_error_field() {
		let body: ErrorBody = serde_json::from_str("{\"error\":\"username is taken\",\"help\":\"pick another\"}").unwrap();
		assert_eq!(body.error, "username is taken");
	}

	#[test]
	fn form_debug_masks_the_password() {
		let form = LoginForm {
			username: String::from("alice"),
			password: String::from("Abc123!@"),
			remember: true,
		};
		let debugged = format!("{:?}", form);
		assert!(debugged.contains("***"));
		assert!(!debugged.contains("Abc123!@"));
	}
}
