// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::errors::ErrorData;
use crate::requests;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

/// The navigation links shown at the top of every page.
#[component]
pub fn NavBar<G: Html>(ctx: Scope<'_>) -> View<G> {
	let log_out_handler = move |_event: WebEvent| {
		spawn_local_scoped(ctx, async move {
			match requests::log_out().await {
				Ok(()) => navigate("/login"),
				Err(error) => {
					let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
					errors.modify().push(ErrorData::new_with_detail("Failed to log out.", error));
				}
			}
		});
	};

	view! {
		ctx,
		nav(id="main_nav") {
			a(href="/") { "Home" }
			a(href="/login") { "Log In" }
			a(href="/signup") { "Sign Up" }
			a(id="log_out_link", class="click", on:click=log_out_handler) { "Log Out" }
		}
	}
}
