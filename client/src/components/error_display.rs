// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::errors::ErrorData;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Renders the running list of failed operations with a dismiss control for
/// each entry.
#[component]
pub fn ErrorDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
	let error_list = create_memo(ctx, || (*errors.get()).clone());

	view! {
		ctx,
		ul(id="page_errors") {
			Indexed(
				iterable=error_list,
				view=|ctx, error| {
					let message = error.message();
					let detail = error.detail();
					let dismiss_handler = {
						let error = error.clone();
						move |_event: WebEvent| {
							let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
							let index = errors.get().iter().position(|entry| *entry == error);
							if let Some(index) = index {
								errors.modify().remove(index);
							}
						}
					};
					view! {
						ctx,
						li(class="page_error_entry") {
							span(class="page_error_entry_text") { (message) }
							(if let Some(detail) = detail.clone() {
								view! {
									ctx,
									span(class="page_error_entry_details") { (detail) }
								}
							} else {
								view! { ctx, }
							})
							span(class="page_error_entry_dismiss") {
								a(class="click", on:click=dismiss_handler) { "[X]" }
							}
						}
					}
				}
			)
		}
	}
}
