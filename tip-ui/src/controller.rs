//! Input handling for the tip screen.
//!
//! [`InteractionController`] owns the screen state and publishes a fresh
//! [`TipView`] through a `tokio::sync::watch` channel after every change.
//! Renderers call [`InteractionController::subscribe`] and redraw on each
//! notification; input events come back through the `set_*` methods and
//! [`InteractionController::activate`].
//!
//! The calculate button has a two-state cycle. Activation enters the pressed
//! state synchronously, clears keyboard focus, and spawns a task that returns
//! to idle after [`PRESS_RESET_DELAY`]. Reset tasks are independent: pressing
//! again while pressed schedules another reset without cancelling the first,
//! so the earlier one can end the pressed state before the later delay has
//! elapsed.

use std::sync::Arc;
use std::time::Duration;

use tip_core::{CurrencyFormat, CurrencyFormatter, TipEngine, TipPercent};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::state::TipView;

/// How long the button stays pressed after activation.
pub const PRESS_RESET_DELAY: Duration = Duration::from_millis(150);

/// Receives the request to drop keyboard focus when the button is activated.
pub trait FocusManager: Send + Sync {
    fn clear_focus(&self);
}

/// Focus manager for front-ends without a focus concept; only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFocus;

impl FocusManager for LogFocus {
    fn clear_focus(&self) {
        debug!("keyboard focus cleared");
    }
}

pub struct InteractionController<F = CurrencyFormat> {
    engine: TipEngine<F>,
    focus: Arc<dyn FocusManager>,
    view: Arc<watch::Sender<TipView>>,
    reset_delay: Duration,
}

impl<F: CurrencyFormatter> InteractionController<F> {
    /// Creates a controller with an empty bill and the default tip percent.
    pub fn new(
        engine: TipEngine<F>,
        focus: Arc<dyn FocusManager>,
    ) -> Self {
        let initial = TipView::new(&engine, TipPercent::default());
        let (view, _) = watch::channel(initial);
        Self {
            engine,
            focus,
            view: Arc::new(view),
            reset_delay: PRESS_RESET_DELAY,
        }
    }

    /// Overrides how long the button stays pressed.
    pub fn with_reset_delay(
        mut self,
        delay: Duration,
    ) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Returns a copy of the current view.
    pub fn snapshot(&self) -> TipView {
        self.view.borrow().clone()
    }

    /// Returns a receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<TipView> {
        self.view.subscribe()
    }

    /// Text field changed. The text is stored verbatim.
    pub fn set_bill_input(
        &self,
        text: impl Into<String>,
    ) {
        let text = text.into();
        trace!(input = %text, "bill input changed");
        self.update(|view| view.bill_input = text);
    }

    /// Slider moved. The position is clamped to `[0, 30]` and snapped to a stop.
    pub fn set_tip_percent(
        &self,
        position: f32,
    ) {
        let percent = TipPercent::from_slider(position);
        trace!(position, percent = %percent, "tip percent changed");
        self.update(|view| view.tip_percent = percent);
    }

    /// Round-up switch toggled.
    pub fn set_round_up(
        &self,
        round_up: bool,
    ) {
        trace!(round_up, "round up changed");
        self.update(|view| view.round_up = round_up);
    }

    /// Calculate button activated.
    ///
    /// Enters the pressed state, clears focus, and schedules the return to
    /// idle. Must be called from within a tokio runtime. The returned handle
    /// completes once this activation's reset has been applied; dropping it
    /// does not cancel the reset.
    pub fn activate(&self) -> JoinHandle<()> {
        self.view.send_modify(|view| view.pressed = true);
        self.focus.clear_focus();

        let view = Arc::clone(&self.view);
        let delay = self.reset_delay;
        debug!(delay_ms = delay.as_millis() as u64, "button pressed");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            view.send_modify(|view| view.pressed = false);
            trace!("button released");
        })
    }

    fn update(
        &self,
        change: impl FnOnce(&mut TipView),
    ) {
        let engine = &self.engine;
        self.view.send_modify(|view| {
            change(view);
            view.recompute(engine);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tokio::time::Instant;

    use super::*;

    #[derive(Default)]
    struct CountingFocus(AtomicUsize);

    impl CountingFocus {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl FocusManager for CountingFocus {
        fn clear_focus(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn controller() -> (InteractionController, Arc<CountingFocus>) {
        let focus = Arc::new(CountingFocus::default());
        let controller = InteractionController::new(TipEngine::default(), focus.clone());
        (controller, focus)
    }

    // =========================================================================
    // input handling
    // =========================================================================

    #[test]
    fn starts_idle_with_defaults() {
        let (controller, _) = controller();
        let view = controller.snapshot();

        assert_eq!(view.bill_input, "");
        assert_eq!(view.tip_percent.value(), dec!(15));
        assert!(!view.round_up);
        assert!(!view.pressed);
        assert_eq!(view.tip, "$0.00");
    }

    #[test]
    fn every_input_recomputes_the_tip() {
        let (controller, _) = controller();

        controller.set_bill_input("50.00");
        assert_eq!(controller.snapshot().tip, "$7.50");

        controller.set_round_up(true);
        assert_eq!(controller.snapshot().tip, "$8.00");

        controller.set_tip_percent(20.0);
        assert_eq!(controller.snapshot().tip, "$10.00");

        controller.set_bill_input("");
        assert_eq!(controller.snapshot().tip, "$0.00");
    }

    #[test]
    fn non_numeric_bill_matches_zero_bill() {
        let (controller, _) = controller();
        controller.set_bill_input("0");
        let zero = controller.snapshot().tip;

        controller.set_bill_input("twelve");
        let view = controller.snapshot();

        assert_eq!(view.tip, zero);
        assert_eq!(view.bill_input, "twelve");
    }

    #[test]
    fn slider_is_kept_in_range() {
        let (controller, _) = controller();

        controller.set_tip_percent(99.0);
        assert_eq!(controller.snapshot().tip_percent.value(), dec!(30));

        controller.set_tip_percent(-3.0);
        assert_eq!(controller.snapshot().tip_percent.value(), dec!(0));
    }

    #[tokio::test]
    async fn subscribers_see_each_change() {
        let (controller, _) = controller();
        let mut views = controller.subscribe();

        controller.set_bill_input("33.33");
        controller.set_tip_percent(20.0);
        views.changed().await.unwrap();

        let view = views.borrow_and_update().clone();
        assert_eq!(view.bill_input, "33.33");
        assert_eq!(view.tip, "$6.67");
        assert!(!views.has_changed().unwrap());
    }

    // =========================================================================
    // pressed state
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn activation_presses_then_releases_after_delay() {
        let (controller, focus) = controller();
        let start = Instant::now();

        let reset = controller.activate();

        assert!(controller.snapshot().pressed);
        assert_eq!(focus.count(), 1);

        tokio::time::sleep(Duration::from_millis(149)).await;
        assert!(controller.snapshot().pressed);

        reset.await.unwrap();
        assert!(!controller.snapshot().pressed);
        assert!(start.elapsed() >= PRESS_RESET_DELAY);
        assert_eq!(focus.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_activation_does_not_cancel_earlier_reset() {
        let (controller, focus) = controller();

        let first = controller.activate();
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = controller.activate();
        assert_eq!(focus.count(), 2);
        assert!(controller.snapshot().pressed);

        // The first reset fires at 150 ms even though the second press was at 100 ms.
        first.await.unwrap();
        assert!(!controller.snapshot().pressed);
        assert!(!second.is_finished());

        second.await.unwrap();
        assert!(!controller.snapshot().pressed);
    }

    #[tokio::test(start_paused = true)]
    async fn pressing_does_not_change_the_tip() {
        let (controller, _) = controller();
        controller.set_bill_input("50");
        let before = controller.snapshot().tip;

        let reset = controller.activate();
        assert_eq!(controller.snapshot().tip, before);
        reset.await.unwrap();
        assert_eq!(controller.snapshot().tip, before);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_delay_is_configurable() {
        let (controller, _) = controller();
        assert_eq!(controller.reset_delay(), PRESS_RESET_DELAY);

        let controller = controller.with_reset_delay(Duration::from_millis(40));
        assert_eq!(controller.reset_delay(), Duration::from_millis(40));
        let start = Instant::now();

        controller.activate().await.unwrap();

        assert!(!controller.snapshot().pressed);
        assert!(start.elapsed() >= Duration::from_millis(40));
        assert!(start.elapsed() < PRESS_RESET_DELAY);
    }
}
