// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;

/// A user-facing report of a failed operation.
///
/// The message is fixed copy describing what failed; the detail carries
/// whatever the failure itself had to say (an error value or a server payload)
/// so it can be shown verbatim.
#[derive(Clone, PartialEq)]
pub struct ErrorData {
	message: &'static str,
	detail: Option<String>,
}

impl ErrorData {
	/// Creates a new data object with no detail to render
	pub fn new(message: &'static str) -> Self {
		Self { message, detail: None }
	}

	/// Creates a new data object carrying the underlying failure
	pub fn new_with_detail(message: &'static str, detail: impl Display) -> Self {
		let detail = Some(format!("{detail}"));
		Self { message, detail }
	}

	pub fn message(&self) -> &'static str {
		self.message
	}

	pub fn detail(&self) -> Option<String> {
		self.detail.clone()
	}
}
