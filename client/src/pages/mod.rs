// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::window;

pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod signup_complete;

/// Sets the document title for the active page.
pub fn set_page_title(new_title: &str) {
	let document = window().and_then(|window| window.document());
	if let Some(document) = document {
		document.set_title(new_title);
	}
}
