// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// How long input must stay unchanged before an availability check fires.
pub const CHECK_DEBOUNCE_MILLIS: u32 = 1000;

/// Collapses rapid repeated triggers into a single run of the most recent
/// action.
///
/// Each trigger replaces the previously scheduled action, so during continuous
/// typing nothing runs until the input has been quiet for the full delay.
/// Clones share the pending slot, so a clone can be moved into an effect or
/// cleanup closure. Dropping the last clone cancels whatever is scheduled.
#[derive(Clone)]
pub struct Debouncer {
	delay_millis: u32,
	pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
	pub fn new(delay_millis: u32) -> Self {
		Self {
			delay_millis,
			pending: Rc::new(RefCell::new(None)),
		}
	}

	/// Schedules `action` to run after the delay, cancelling any earlier action
	/// that hasn't fired yet.
	///
	/// Whether the surviving timeout fires exactly once is up to the browser's
	/// timer queue, so it can't be observed from a native test.
	// TODO: Cover the one-fire-per-burst behavior with wasm-bindgen-test once a browser test runner is set up
	pub fn trigger(&self, action: impl FnOnce() + 'static) {
		let timeout = Timeout::new(self.delay_millis, action);
		if let Some(previous) = self.pending.replace(Some(timeout)) {
			previous.cancel();
		}
	}

	/// Cancels the scheduled action, if one hasn't fired yet.
	pub fn cancel(&self) {
		if let Some(previous) = self.pending.take() {
			previous.cancel();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn checks_wait_a_full_second_of_quiet() {
		let debouncer = Debouncer::new(CHECK_DEBOUNCE_MILLIS);
		assert_eq!(debouncer.delay_millis, 1000);
	}

	#[test]
	fn cancelling_with_nothing_scheduled_is_harmless() {
		Debouncer::new(CHECK_DEBOUNCE_MILLIS).cancel();
	}

	#[test]
	fn clones_share_the_pending_slot() {
		let debouncer = Debouncer::new(CHECK_DEBOUNCE_MILLIS);
		let clone = debouncer.clone();
		assert!(Rc::ptr_eq(&debouncer.pending, &clone.pending));
	}
}
