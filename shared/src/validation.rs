// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub const USERNAME_MIN_LENGTH: usize = 2;
pub const USERNAME_LENGTH_LIMIT: usize = 30;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Characters that count toward the password special character requirement.
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// A username that satisfies the account naming rules.
///
/// Usernames are 2 to 30 characters drawn from ASCII letters, digits, and `_`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Username(String);

impl Username {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl TryFrom<String> for Username {
	type Error = &'static str;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_username(&value)?;
		Ok(Self(value))
	}
}

impl FromStr for Username {
	type Err = &'static str;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::try_from(s.to_string())
	}
}

impl fmt::Display for Username {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl<'de> Deserialize<'de> for Username {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = String::deserialize(deserializer)?;
		Self::try_from(value.clone()).map_err(|_| Error::invalid_value(Unexpected::Str(&value), &"a valid username"))
	}
}

fn validate_username(value: &str) -> Result<(), &'static str> {
	let length = value.chars().count();
	if length < USERNAME_MIN_LENGTH {
		return Err("username must be at least 2 characters");
	}
	if length > USERNAME_LENGTH_LIMIT {
		return Err("username must be at most 30 characters");
	}
	if value.chars().any(|c| !c.is_ascii_alphanumeric() && c != '_') {
		return Err("username may only contain letters, digits, and '_'");
	}
	Ok(())
}

/// An email address that passed the structural checks applied at signup.
///
/// The checks are deliberately loose so that nothing a mail server would
/// accept gets turned away here; a dotless domain such as `a@b` is legal. The
/// address is only proven usable by delivering mail to it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Email(String);

impl Email {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl TryFrom<String> for Email {
	type Error = &'static str;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_email(&value)?;
		Ok(Self(value))
	}
}

impl FromStr for Email {
	type Err = &'static str;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::try_from(s.to_string())
	}
}

impl fmt::Display for Email {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl<'de> Deserialize<'de> for Email {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = String::deserialize(deserializer)?;
		Self::try_from(value.clone()).map_err(|_| Error::invalid_value(Unexpected::Str(&value), &"a valid email address"))
	}
}

fn validate_email(value: &str) -> Result<(), &'static str> {
	if value.is_empty() {
		return Err("email cannot be empty");
	}
	if value.chars().any(char::is_whitespace) {
		return Err("email cannot contain whitespace");
	}
	let Some((local, domain)) = value.split_once('@') else {
		return Err("email must contain '@'");
	};
	if local.is_empty() {
		return Err("email is missing the part before '@'");
	}
	if domain.is_empty() || domain.contains('@') {
		return Err("email must contain exactly one '@' followed by a domain");
	}
	if domain.split('.').any(|label| label.is_empty()) {
		return Err("email domain is malformed");
	}
	Ok(())
}

/// A password that satisfies the strength rules.
///
/// The text is never exposed through `Debug`, so the password can't leak into
/// logs by accident.
#[derive(Clone)]
pub struct Password(String);

impl Password {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl TryFrom<String> for Password {
	type Error = &'static str;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_password(&value)?;
		Ok(Self(value))
	}
}

impl FromStr for Password {
	type Err = &'static str;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::try_from(s.to_string())
	}
}

impl fmt::Debug for Password {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Password(***)")
	}
}

impl<'de> Deserialize<'de> for Password {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = String::deserialize(deserializer)?;
		Self::try_from(value).map_err(|message| Error::invalid_value(Unexpected::Other("a weak password"), &message))
	}
}

fn validate_password(value: &str) -> Result<(), &'static str> {
	if value.chars().count() < PASSWORD_MIN_LENGTH {
		return Err("password must be at least 8 characters");
	}
	if !value.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c)) {
		return Err("password must contain at least one special character");
	}
	if !value.chars().any(|c| c.is_ascii_digit()) {
		return Err("password must contain at least one digit");
	}
	if !value.chars().any(|c| c.is_ascii_lowercase()) {
		return Err("password must contain at least one lowercase letter");
	}
	if !value.chars().any(|c| c.is_ascii_uppercase()) {
		return Err("password must contain at least one uppercase letter");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn username_length_limits() {
		assert!("a".parse::<Username>().is_err());
		assert!("ab".parse::<Username>().is_ok());
		assert!("a".repeat(USERNAME_LENGTH_LIMIT).parse::<Username>().is_ok());
		assert!("a".repeat(USERNAME_LENGTH_LIMIT + 1).parse::<Username>().is_err());
	}

	#[test]
	fn username_character_rules() {
		assert!("user_07".parse::<Username>().is_ok());
		assert!("0user".parse::<Username>().is_ok());
		assert!("_user".parse::<Username>().is_ok());
		assert!("user.name".parse::<Username>().is_err());
		assert!("user-name".parse::<Username>().is_err());
		assert!("user name".parse::<Username>().is_err());
		assert!("usér".parse::<Username>().is_err());
	}

	#[test]
	fn email_structure() {
		assert!("a@b.com".parse::<Email>().is_ok());
		assert!("a@b".parse::<Email>().is_ok());
		assert!("first.last@mail.example.org".parse::<Email>().is_ok());
		assert!("invalid".parse::<Email>().is_err());
		assert!("@b.com".parse::<Email>().is_err());
		assert!("a@".parse::<Email>().is_err());
		assert!("a b@c.com".parse::<Email>().is_err());
		assert!("a@b@c.com".parse::<Email>().is_err());
		assert!("a@.com".parse::<Email>().is_err());
		assert!("a@b..c".parse::<Email>().is_err());
	}

	#[test]
	fn password_rules_are_checked_in_order() {
		assert_eq!("Ab1!".parse::<Password>().unwrap_err(), "password must be at least 8 characters");
		assert_eq!(
			"Abcd1234".parse::<Password>().unwrap_err(),
			"password must contain at least one special character"
		);
		assert_eq!(
			"Abcdefg!".parse::<Password>().unwrap_err(),
			"password must contain at least one digit"
		);
		assert_eq!(
			"ABCDEF1!".parse::<Password>().unwrap_err(),
			"password must contain at least one lowercase letter"
		);
		assert_eq!(
			"abcdef1!".parse::<Password>().unwrap_err(),
			"password must contain at least one uppercase letter"
		);
		assert!("Abc123!@".parse::<Password>().is_ok());
	}

	#[test]
	fn password_debug_is_masked() {
		let password: Password = "Abc123!@".parse().unwrap();
		assert_eq!(format!("{:?}", password), "Password(***)");
	}

	#[test]
	fn deserializing_validates_the_value() {
		assert!(serde_json::from_str::<Username>("\"valid_name\"").is_ok());
		assert!(serde_json::from_str::<Username>("\"x\"").is_err());
		assert!(serde_json::from_str::<Email>("\"a@b.com\"").is_ok());
		assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
		assert!(serde_json::from_str::<Password>("\"Abc123!@\"").is_ok());
		assert!(serde_json::from_str::<Password>("\"short\"").is_err());
	}
}
