// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::set_page_title;
use sycamore::prelude::*;

#[component]
pub fn SignupCompleteView<G: Html>(ctx: Scope) -> View<G> {
	set_page_title("Welcome!");

	view! {
		ctx,
		div(id="signup_complete") {
			h1 {
				"Welcome!"
			}
			p {
				"Your account has been created."
			}
			p {
				a(href="/login") {
					"Log in to get started."
				}
			}
		}
	}
}
