// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gatehouse_shared::api::{ErrorBody, LoginForm, SignupForm};
use gloo_net::http::{Request, Response};
use std::fmt;
use web_sys::{RequestCredentials, UrlSearchParams};

/// How a request to the auth server failed.
#[derive(Debug)]
pub enum RequestError {
	/// The request couldn't be sent or the response couldn't be read.
	Network(gloo_net::Error),
	/// The server answered with a failure status; the payload is kept verbatim
	/// so it can be surfaced to the user.
	Rejected(String),
}

impl fmt::Display for RequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "{}", error),
			Self::Rejected(payload) => write!(f, "{}", payload),
		}
	}
}

impl From<gloo_net::Error> for RequestError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

/// Outcome of an availability check that completed an HTTP exchange.
///
/// The status code is kept raw; classifying it into a field status is the
/// caller's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct AvailabilityReply {
	pub code: u16,
	pub error_message: Option<String>,
}

pub async fn check_username_availability(username: &str) -> Result<AvailabilityReply, RequestError> {
	availability_request("/check/username-availability", "username", username).await
}

pub async fn check_email_availability(email: &str) -> Result<AvailabilityReply, RequestError> {
	availability_request("/check/email-availability", "email", email).await
}

async fn availability_request(path: &'static str, param: &'static str, value: &str) -> Result<AvailabilityReply, RequestError> {
	let response = Request::get(path).query([(param, value)]).send().await?;
	let code = response.status();
	let error_message = if code == 400 {
		response
			.text()
			.await
			.ok()
			.and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
			.map(|body| body.error)
	} else {
		None
	};
	Ok(AvailabilityReply { code, error_message })
}

pub async fn submit_signup(form: &SignupForm) -> Result<(), RequestError> {
	let body = form_body(&signup_fields(form));
	let response = Request::post("/signup")
		.header("Content-Type", "application/x-www-form-urlencoded")
		.body(body)?
		.send()
		.await?;
	if response.ok() {
		Ok(())
	} else {
		Err(RequestError::Rejected(rejection_payload(response).await))
	}
}

pub async fn submit_login(form: &LoginForm) -> Result<(), RequestError> {
	let body = form_body(&login_fields(form));
	let response = Request::post("/login")
		.header("Content-Type", "application/x-www-form-urlencoded")
		.credentials(RequestCredentials::Include)
		.body(body)?
		.send()
		.await?;
	if response.ok() {
		Ok(())
	} else {
		Err(RequestError::Rejected(rejection_payload(response).await))
	}
}

pub async fn fetch_private() -> Result<String, RequestError> {
	let response = Request::get("/private")
		.credentials(RequestCredentials::Include)
		.send()
		.await?;
	if response.ok() {
		Ok(response.text().await?)
	} else {
		Err(RequestError::Rejected(rejection_payload(response).await))
	}
}

pub async fn log_out() -> Result<(), RequestError> {
	let response = Request::get("/logout")
		.credentials(RequestCredentials::Include)
		.send()
		.await?;
	if response.ok() {
		Ok(())
	} else {
		Err(RequestError::Rejected(rejection_payload(response).await))
	}
}

/// The field names and raw values sent for a signup.
fn signup_fields(form: &SignupForm) -> [(&'static str, String); 3] {
	[
		("username", form.username.clone()),
		("password", form.password.clone()),
		("email", form.email.clone()),
	]
}

/// The field names and raw values sent for a login.
fn login_fields(form: &LoginForm) -> [(&'static str, String); 3] {
	[
		("username", form.username.clone()),
		("password", form.password.clone()),
		("remember", String::from(if form.remember { "true" } else { "false" })),
	]
}

/// Encodes fields as a form-urlencoded request body.
///
/// Panics if the browser can't construct URL search parameters, which only
/// happens outside a web context.
fn form_body(fields: &[(&'static str, String)]) -> String {
	let params = UrlSearchParams::new().expect("Failed to create URL search parameters");
	for (name, value) in fields {
		params.append(name, value);
	}
	params.to_string().into()
}

async fn rejection_payload(response: Response) -> String {
	match response.text().await {
		Ok(text) if !text.is_empty() => text,
		_ => format!("HTTP {}", response.status()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn signup_fields_carry_raw_values() {
		let form = SignupForm {
			username: String::from("alice"),
			password: String::from("Abc123!@"),
			email: String::from("a@b.com"),
		};
		let fields = signup_fields(&form);
		assert_eq!(
			fields,
			[
				("username", String::from("alice")),
				("password", String::from("Abc123!@")),
				("email", String::from("a@b.com")),
			]
		);
	}

	#[test]
	fn login_fields_stringify_remember() {
		let mut form = LoginForm {
			username: String::from("alice"),
			password: String::from("Abc123!@"),
			remember: true,
		};
		assert_eq!(login_fields(&form)[2], ("remember", String::from("true")));
		form.remember = false;
		assert_eq!(login_fields(&form)[2], ("remember", String::from("false")));
	}
}
