// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::set_page_title;
use crate::errors::ErrorData;
use crate::requests::{self, RequestError};
use gatehouse_shared::api::LoginForm;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
pub fn LoginView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title("Log In");

	let username_input = create_signal(ctx, String::new());
	let password_input = create_signal(ctx, String::new());
	let remember_input = create_signal(ctx, false);

	let submit_handler = move |event: WebEvent| {
		event.prevent_default();

		if username_input.get().is_empty() || password_input.get().is_empty() {
			return;
		}

		let form = LoginForm {
			username: (*username_input.get()).clone(),
			password: (*password_input.get()).clone(),
			remember: *remember_input.get(),
		};
		spawn_local_scoped(ctx, async move {
			match requests::submit_login(&form).await {
				Ok(()) => {
					log::debug!("Login succeeded for {}", form.username);
					navigate("/");
				}
				Err(RequestError::Rejected(payload)) => {
					let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
					errors.modify().push(ErrorData::new_with_detail("Login failed.", payload));
				}
				Err(error) => {
					let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
					errors.modify().push(ErrorData::new_with_detail("Failed to send the login request.", error));
				}
			}
		});
	};

	view! {
		ctx,
		h1 { "Log In" }
		form(id="login_form", on:submit=submit_handler) {
			div(class="input_with_message") {
				label(for="login_username") {
					"Username: "
				}
				input(id="login_username", type="text", bind:value=username_input)
			}
			div(class="input_with_message") {
				label(for="login_password") {
					"Password: "
				}
				input(id="login_password", type="password", bind:value=password_input)
			}
			div(class="input_with_message") {
				label(for="login_remember") {
					"Remember me"
				}
				input(id="login_remember", type="checkbox", bind:checked=remember_input)
			}
			button(id="login_button", type="submit") {
				"Log In"
			}
		}
	}
}
