// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

mod app;
mod components;
mod debounce;
mod errors;
mod pages;
mod requests;
mod validators;

use app::App;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	sycamore::render(|ctx| {
		view! {
			ctx,
			App {}
		}
	});
}
