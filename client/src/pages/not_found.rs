// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::set_page_title;
use sycamore::prelude::*;

#[component]
pub fn NotFoundView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating fallback page for unknown location");
	set_page_title("Not Found");

	view! {
		ctx,
		h1 { "Not found!" }
		p { "There's no page at this address." }
		p {
			a(href="/") {
				"Return to the main page?"
			}
		}
	}
}
