// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::error_display::ErrorDisplay;
use crate::components::nav_bar::NavBar;
use crate::errors::ErrorData;
use crate::pages::home::HomeView;
use crate::pages::login::LoginView;
use crate::pages::not_found::NotFoundView;
use crate::pages::signup::SignupView;
use crate::pages::signup_complete::SignupCompleteView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
enum AppRoute {
	#[to("/")]
	Home,
	#[to("/login")]
	Login,
	#[to("/signup")]
	Signup,
	#[to("/signup_complete")]
	SignupComplete,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let errors: &Signal<Vec<ErrorData>> = create_signal(ctx, Vec::new());
	provide_context_ref(ctx, errors);

	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoute>| {
				view! {
					ctx,
					NavBar {}
					ErrorDisplay {}
					main {
						(match route.get().as_ref() {
							AppRoute::Home => view! { ctx, HomeView {} },
							AppRoute::Login => view! { ctx, LoginView {} },
							AppRoute::Signup => view! { ctx, SignupView {} },
							AppRoute::SignupComplete => view! { ctx, SignupCompleteView {} },
							AppRoute::NotFound => view! { ctx, NotFoundView {} },
						})
					}
				}
			}
		)
	}
}
