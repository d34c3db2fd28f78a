// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::set_page_title;
use crate::errors::ErrorData;
use crate::requests;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn HomeView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title("Home");

	let private_data: &Signal<Option<String>> = create_signal(ctx, None);

	let fetch_handler = move |_event: WebEvent| {
		spawn_local_scoped(ctx, async move {
			match requests::fetch_private().await {
				Ok(text) => private_data.set(Some(text)),
				Err(error) => {
					let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
					errors.modify().push(ErrorData::new_with_detail("Failed to load your private data.", error));
				}
			}
		});
	};

	view! {
		ctx,
		h1 { "Home" }
		p { "Log in or create an account using the links above." }
		button(id="fetch_private_button", on:click=fetch_handler) {
			"Fetch private data"
		}
		(if let Some(text) = (*private_data.get()).clone() {
			view! {
				ctx,
				p(id="private_data") { (text) }
			}
		} else {
			view! { ctx, }
		})
	}
}
