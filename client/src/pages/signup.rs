// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::set_page_title;
use crate::debounce::{Debouncer, CHECK_DEBOUNCE_MILLIS};
use crate::errors::ErrorData;
use crate::requests::{self, RequestError};
use crate::validators::field::{run_availability_check, AvailabilityField, FieldValidator};
use crate::validators::{password_strength_status, submission_allowed, FieldStatus};
use gatehouse_shared::api::SignupForm;
use sycamore::futures::{spawn_local, spawn_local_scoped};
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
pub fn SignupView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title("Sign Up");

	let username_input = create_signal(ctx, String::new());
	let password_input = create_signal(ctx, String::new());
	let email_input = create_signal(ctx, String::new());

	let username_validator = FieldValidator::new();
	let email_validator = FieldValidator::new();
	let username_debounce = Debouncer::new(CHECK_DEBOUNCE_MILLIS);
	let email_debounce = Debouncer::new(CHECK_DEBOUNCE_MILLIS);
	let password_status = create_signal(ctx, FieldStatus::Idle);

	// Each keystroke supersedes the previous check generation immediately; the
	// request itself only goes out once typing pauses.
	create_effect(ctx, {
		let username_validator = username_validator.clone();
		let username_debounce = username_debounce.clone();
		move || {
			let value = (*username_input.get()).clone();

			if value.is_empty() {
				username_debounce.cancel();
				username_validator.clear();
				return;
			}

			let ticket = username_validator.begin_check();
			let validator = username_validator.clone();
			username_debounce.trigger(move || {
				spawn_local(run_availability_check(validator, ticket, AvailabilityField::Username, value));
			});
		}
	});

	create_effect(ctx, {
		let email_validator = email_validator.clone();
		let email_debounce = email_debounce.clone();
		move || {
			let value = (*email_input.get()).clone();

			if value.is_empty() {
				email_debounce.cancel();
				email_validator.clear();
				return;
			}

			let ticket = email_validator.begin_check();
			let validator = email_validator.clone();
			email_debounce.trigger(move || {
				spawn_local(run_availability_check(validator, ticket, AvailabilityField::Email, value));
			});
		}
	});

	// Password strength is decided locally, so no debounce is needed.
	create_effect(ctx, move || {
		password_status.set(password_strength_status(&password_input.get()));
	});

	let submit_allowed = create_memo(ctx, {
		let username_status = username_validator.status.clone();
		let email_status = email_validator.status.clone();
		move || submission_allowed(&username_status.get(), &password_status.get(), &email_status.get())
	});

	let username_message = create_memo(ctx, {
		let status = username_validator.status.clone();
		move || availability_message(&status.get(), "username")
	});
	let email_message = create_memo(ctx, {
		let status = email_validator.status.clone();
		move || availability_message(&status.get(), "email")
	});
	let password_message = create_memo(ctx, || strength_message(&password_status.get()));

	let username_error_class = create_memo(ctx, || if username_message.get().is_some() { "error" } else { "" });
	let password_error_class = create_memo(ctx, || if password_message.get().is_some() { "error" } else { "" });
	let email_error_class = create_memo(ctx, || if email_message.get().is_some() { "error" } else { "" });

	let submit_handler = move |event: WebEvent| {
		event.prevent_default();

		// The button is disabled while this is false, but a submit can still be
		// triggered other ways (for example, Enter in a field).
		if !*submit_allowed.get() {
			return;
		}

		let form = SignupForm {
			username: (*username_input.get()).clone(),
			password: (*password_input.get()).clone(),
			email: (*email_input.get()).clone(),
		};
		spawn_local_scoped(ctx, async move {
			match requests::submit_signup(&form).await {
				Ok(()) => navigate("/signup_complete"),
				Err(RequestError::Rejected(payload)) => {
					let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
					errors.modify().push(ErrorData::new_with_detail("The sign-up request was rejected.", payload));
				}
				Err(error) => {
					let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
					errors.modify().push(ErrorData::new_with_detail("Failed to send the sign-up request.", error));
				}
			}
		});
	};

	on_cleanup(ctx, {
		let username_validator = username_validator.clone();
		let email_validator = email_validator.clone();
		let username_debounce = username_debounce.clone();
		let email_debounce = email_debounce.clone();
		move || {
			// Timers first so nothing new can start, then supersede whatever is
			// still in flight.
			username_debounce.cancel();
			email_debounce.cancel();
			username_validator.invalidate();
			email_validator.invalidate();
		}
	});

	view! {
		ctx,
		h1 { "Create an Account" }
		form(id="signup_form", on:submit=submit_handler) {
			div(class="input_with_message") {
				label(for="signup_username") {
					"Username: "
				}
				input(id="signup_username", type="text", class=*username_error_class.get(), bind:value=username_input)
				(if let Some(message) = (*username_message.get()).clone() {
					view! {
						ctx,
						span(class="input_error signup_username_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			div(class="input_with_message") {
				label(for="signup_password") {
					"Password: "
				}
				input(id="signup_password", type="password", class=*password_error_class.get(), bind:value=password_input)
				(if let Some(message) = (*password_message.get()).clone() {
					view! {
						ctx,
						span(class="input_error signup_password_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			div(class="input_with_message") {
				label(for="signup_email") {
					"Email: "
				}
				input(id="signup_email", type="email", class=*email_error_class.get(), bind:value=email_input)
				(if let Some(message) = (*email_message.get()).clone() {
					view! {
						ctx,
						span(class="input_error signup_email_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			button(id="signup_button", type="submit", disabled=!*submit_allowed.get()) {
				"Sign Up"
			}
		}
	}
}

/// The inline message shown under an availability-checked field.
///
/// Pending shows nothing: the previous message no longer describes the current
/// value, and flashing partial feedback while typing would be noise.
fn availability_message(status: &FieldStatus, field_noun: &'static str) -> Option<String> {
	match status {
		FieldStatus::Unavailable => Some(format!("This {} is already taken.", field_noun)),
		FieldStatus::Invalid(Some(message)) => Some(message.clone()),
		FieldStatus::Invalid(None) => Some(format!("This {} is invalid.", field_noun)),
		FieldStatus::Idle | FieldStatus::Pending | FieldStatus::Ok => None,
	}
}

/// The inline message shown under the password field.
fn strength_message(status: &FieldStatus) -> Option<String> {
	match status {
		FieldStatus::Invalid(Some(message)) => Some(message.clone()),
		FieldStatus::Invalid(None) => Some(String::from("This password is too weak.")),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn availability_messages_cover_the_failure_states() {
		assert_eq!(
			availability_message(&FieldStatus::Unavailable, "username"),
			Some(String::from("This username is already taken."))
		);
		assert_eq!(
			availability_message(
				&FieldStatus::Invalid(Some(String::from("username must be at least 2 characters"))),
				"username"
			),
			Some(String::from("username must be at least 2 characters"))
		);
		assert_eq!(
			availability_message(&FieldStatus::Invalid(None), "email"),
			Some(String::from("This email is invalid."))
		);
	}

	#[test]
	fn no_message_is_shown_while_a_check_is_unresolved() {
		assert_eq!(availability_message(&FieldStatus::Idle, "username"), None);
		assert_eq!(availability_message(&FieldStatus::Pending, "username"), None);
		assert_eq!(availability_message(&FieldStatus::Ok, "username"), None);
	}

	#[test]
	fn strength_messages_only_appear_for_weak_passwords() {
		assert_eq!(strength_message(&FieldStatus::Idle), None);
		assert_eq!(strength_message(&FieldStatus::Ok), None);
		assert_eq!(
			strength_message(&FieldStatus::Invalid(Some(String::from(
				"password must contain at least one digit"
			)))),
			Some(String::from("password must contain at least one digit"))
		);
	}
}
