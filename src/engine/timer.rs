//! Timer engine for the clock.
//!
//! This module provides the core clock functionality:
//! - Countdown/stopwatch state transitions
//! - The one-second tick process
//! - Overlay auto-hide after input inactivity
//! - Digit editing with a short highlight
//! - Keyboard dispatch
//!
//! Each of the three timers (tick, auto-hide, flash-clear) has at most one
//! live [`CancelToken`]. Scheduling a new one cancels the old one first, and
//! fires carrying a token the engine no longer holds are dropped.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use super::scheduler::{CancelToken, Fired, ManualScheduler, Scheduler, TimerKind};
use crate::display::DisplayController;
use crate::input::{map_key, Command, Key};
use crate::sound::SoundSignal;
use crate::types::{ClockConfig, ClockState, TickOutcome, TimerSnapshot};

// ============================================================================
// Dispatch
// ============================================================================

/// Outcome of feeding a key to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The key mapped to a command and the engine ran it
    Handled(Command),
    /// The key has no binding
    Ignored,
    /// The user asked to leave; the host decides what that means
    Quit,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Clock engine owning the state and its timers.
pub struct TimerEngine<S: Scheduler> {
    state: ClockState,
    config: ClockConfig,
    scheduler: S,
    sound: Option<Arc<dyn SoundSignal>>,
    display: Option<Arc<dyn DisplayController>>,
    tick: Option<CancelToken>,
    auto_hide: Option<CancelToken>,
    flash: Option<CancelToken>,
}

impl<S: Scheduler> TimerEngine<S> {
    /// Creates a paused engine from the configuration.
    pub fn new(config: ClockConfig, scheduler: S) -> Self {
        Self {
            state: ClockState::new(&config),
            config,
            scheduler,
            sound: None,
            display: None,
            tick: None,
            auto_hide: None,
            flash: None,
        }
    }

    /// Attaches the consumer of chime and click signals.
    pub fn with_sound(mut self, sound: Arc<dyn SoundSignal>) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Attaches the fullscreen controller.
    pub fn with_display(mut self, display: Arc<dyn DisplayController>) -> Self {
        self.display = Some(display);
        self
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Starts or pauses the clock.
    ///
    /// A countdown sitting at zero cannot be started.
    pub fn toggle_timer(&mut self) {
        if !self.state.is_running && !self.state.can_start() {
            debug!("Ignoring start of an empty countdown");
            return;
        }
        if self.state.is_running {
            self.state.is_running = false;
            self.stop_processes();
            info!(seconds = self.state.seconds, "Clock paused");
        } else {
            self.state.is_running = true;
            self.start_processes();
            info!(
                mode = self.state.mode.as_str(),
                seconds = self.state.seconds,
                "Clock started"
            );
        }
    }

    /// Pauses and restores the mode's starting value.
    pub fn reset(&mut self) {
        self.state.reset();
        self.stop_processes();
        debug!(seconds = self.state.seconds, "Clock reset");
    }

    /// Pauses and flips between countdown and stopwatch.
    pub fn switch_mode(&mut self) {
        self.state.switch_mode(self.config.fallback_seconds);
        self.stop_processes();
        debug!(
            mode = self.state.mode.as_str(),
            seconds = self.state.seconds,
            "Mode switched"
        );
    }

    pub fn cycle_font(&mut self) {
        self.state.cycle_font();
        debug!(font = self.state.font_index, "Font cycled");
    }

    pub fn cycle_theme(&mut self) {
        self.state.cycle_theme();
        debug!(theme = self.state.theme_index, "Theme cycled");
    }

    /// Flips the user's hide request. Unhiding shows the overlay at once.
    pub fn toggle_ui_hidden(&mut self) {
        let hidden = self.state.toggle_user_hidden();
        debug!(hidden, "Overlay visibility toggled");
    }

    /// Nudges the digit group under edit.
    ///
    /// Only a paused countdown can be edited; otherwise this does nothing.
    pub fn adjust_time(&mut self, increment: bool) {
        if !self.state.is_editable() {
            trace!("Ignoring time adjustment outside edit mode");
            return;
        }

        self.state.flash_scope = Some(self.state.edit_scope);
        self.replace_once(TimerKind::FlashClear, self.config.flash_ms);

        if let Some(sound) = &self.sound {
            if let Err(e) = sound.click() {
                warn!("Failed to play click: {}", e);
            }
        }

        self.state.adjust(increment, self.config.max_minutes);
        trace!(seconds = self.state.seconds, "Time adjusted");
    }

    pub fn toggle_edit_scope(&mut self) {
        self.state.toggle_edit_scope();
    }

    /// Asks the display controller to toggle fullscreen.
    pub fn toggle_fullscreen(&mut self) {
        let Some(display) = &self.display else {
            debug!("No display controller attached");
            return;
        };
        if let Err(e) = display.toggle_fullscreen() {
            warn!("Fullscreen request failed: {} ({})", e, e.suggestion());
        }
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    /// Runs a command.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::ToggleTimer => self.toggle_timer(),
            Command::Reset => self.reset(),
            Command::SwitchMode => self.switch_mode(),
            Command::ToggleFullscreen => self.toggle_fullscreen(),
            Command::CycleFont => self.cycle_font(),
            Command::CycleTheme => self.cycle_theme(),
            Command::ToggleUiHidden => self.toggle_ui_hidden(),
            Command::AdjustTime(increment) => self.adjust_time(increment),
            Command::ToggleEditScope => self.toggle_edit_scope(),
            Command::Quit => {}
        }
    }

    /// Handles a key press.
    ///
    /// Every key counts as activity for the auto-hide countdown, bound or not.
    pub fn handle_key(&mut self, key: Key) -> Dispatch {
        self.note_activity();

        match map_key(key) {
            None => Dispatch::Ignored,
            Some(Command::Quit) => Dispatch::Quit,
            Some(command) => {
                trace!(%command, "Dispatching key");
                self.execute(command);
                Dispatch::Handled(command)
            }
        }
    }

    /// Handles pointer movement.
    pub fn pointer_moved(&mut self) {
        self.note_activity();
    }

    /// Shows the overlay and restarts the hide countdown while running.
    fn note_activity(&mut self) {
        if !self.state.is_running {
            return;
        }
        self.state.auto_hide_visible = true;
        self.replace_once(TimerKind::AutoHide, self.config.auto_hide_ms);
    }

    // ------------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------------

    /// Applies a timer fire delivered by the scheduler.
    pub fn on_fired(&mut self, fired: Fired) {
        match fired.kind {
            TimerKind::Tick => {
                if self.tick != Some(fired.token) {
                    trace!(token = fired.token.id(), "Dropping stale tick");
                    return;
                }
                self.handle_tick();
            }
            TimerKind::AutoHide => {
                if self.auto_hide != Some(fired.token) {
                    return;
                }
                self.auto_hide = None;
                if self.state.is_running {
                    self.state.auto_hide_visible = false;
                }
            }
            TimerKind::FlashClear => {
                if self.flash != Some(fired.token) {
                    return;
                }
                self.flash = None;
                self.state.flash_scope = None;
            }
        }
    }

    fn handle_tick(&mut self) {
        match self.state.tick() {
            TickOutcome::Advanced => trace!(seconds = self.state.seconds, "Tick"),
            TickOutcome::Idle => {}
            TickOutcome::Completed => {
                self.stop_processes();
                info!("Countdown completed");
                if let Some(sound) = &self.sound {
                    if let Err(e) = sound.notify() {
                        warn!("Failed to play completion chime: {}", e);
                    }
                }
            }
        }
    }

    fn start_processes(&mut self) {
        if let Some(token) = self.tick.take() {
            self.scheduler.cancel(token);
        }
        let period = Duration::from_millis(self.config.tick_ms);
        self.tick = Some(self.scheduler.schedule_repeating(TimerKind::Tick, period));

        self.state.auto_hide_visible = true;
        self.replace_once(TimerKind::AutoHide, self.config.auto_hide_ms);
    }

    fn stop_processes(&mut self) {
        if let Some(token) = self.tick.take() {
            self.scheduler.cancel(token);
        }
        if let Some(token) = self.auto_hide.take() {
            self.scheduler.cancel(token);
        }
        self.state.auto_hide_visible = true;
    }

    fn replace_once(&mut self, kind: TimerKind, delay_ms: u64) {
        let slot = match kind {
            TimerKind::AutoHide => &mut self.auto_hide,
            TimerKind::FlashClear => &mut self.flash,
            TimerKind::Tick => &mut self.tick,
        };
        if let Some(token) = slot.take() {
            self.scheduler.cancel(token);
        }
        *slot = Some(
            self.scheduler
                .schedule_once(kind, Duration::from_millis(delay_ms)),
        );
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns the renderer-facing snapshot.
    pub fn snapshot(&self) -> TimerSnapshot {
        self.state.snapshot()
    }

    /// Returns a reference to the current clock state.
    pub fn get_state(&self) -> &ClockState {
        &self.state
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns a mutable reference to the clock state (for testing).
    #[cfg(test)]
    pub fn get_state_mut(&mut self) -> &mut ClockState {
        &mut self.state
    }
}

impl TimerEngine<ManualScheduler> {
    /// Moves virtual time forward, applying every fire that falls due.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.scheduler.now() + by;
        while let Some(fired) = self.scheduler.pop_due(deadline) {
            self.on_fired(fired);
        }
        self.scheduler.settle(deadline);
    }
}

impl<S: Scheduler> std::fmt::Debug for TimerEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("state", &self.state)
            .field("tick", &self.tick)
            .field("auto_hide", &self.auto_hide)
            .field("flash", &self.flash)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MockDisplayController;
    use crate::sound::MockSoundSignal;
    use crate::types::{EditScope, TimerMode};

    const SECOND: Duration = Duration::from_secs(1);

    fn create_engine() -> TimerEngine<ManualScheduler> {
        TimerEngine::new(ClockConfig::default(), ManualScheduler::new())
    }

    fn create_engine_with_seconds(
        seconds: u32,
    ) -> (TimerEngine<ManualScheduler>, Arc<MockSoundSignal>) {
        let config = ClockConfig {
            initial_seconds: seconds,
            ..Default::default()
        };
        let sound = Arc::new(MockSoundSignal::new());
        let engine = TimerEngine::new(config, ManualScheduler::new()).with_sound(sound.clone());
        (engine, sound)
    }

    // ------------------------------------------------------------------------
    // Lifecycle Tests
    // ------------------------------------------------------------------------

    mod lifecycle_tests {
        use super::*;

        #[test]
        fn test_new_engine() {
            let engine = create_engine();
            let snap = engine.snapshot();

            assert_eq!(snap.mode, TimerMode::Countdown);
            assert_eq!(snap.seconds, 1500);
            assert!(!snap.is_running);
            assert!(snap.ui_visible);
            assert_eq!(snap.edit_scope, EditScope::Minutes);
            assert_eq!(snap.font_index, 0);
            assert_eq!(snap.theme_index, 0);
            assert_eq!(engine.scheduler().active_total(), 0);
        }

        #[test]
        fn test_toggle_starts_and_pauses() {
            let mut engine = create_engine();

            engine.toggle_timer();
            assert!(engine.snapshot().is_running);
            assert_eq!(engine.scheduler().active(TimerKind::Tick), 1);
            assert_eq!(engine.scheduler().active(TimerKind::AutoHide), 1);

            engine.toggle_timer();
            assert!(!engine.snapshot().is_running);
            assert_eq!(engine.scheduler().active_total(), 0);
        }

        #[test]
        fn test_cannot_start_empty_countdown() {
            let (mut engine, _sound) = create_engine_with_seconds(0);
            engine.toggle_timer();
            assert!(!engine.snapshot().is_running);
            assert_eq!(engine.scheduler().active_total(), 0);
        }

        #[test]
        fn test_stopwatch_starts_at_zero() {
            let mut engine = create_engine();
            engine.switch_mode();
            engine.toggle_timer();
            assert!(engine.snapshot().is_running);
        }

        #[test]
        fn test_reset_while_running() {
            let (mut engine, _sound) = create_engine_with_seconds(90);
            engine.toggle_timer();
            engine.advance(5 * SECOND);
            assert_eq!(engine.snapshot().seconds, 85);

            engine.reset();
            let snap = engine.snapshot();
            assert!(!snap.is_running);
            assert_eq!(snap.seconds, 90);
            assert_eq!(engine.scheduler().active(TimerKind::Tick), 0);
        }

        #[test]
        fn test_switch_mode_round_trip() {
            let (mut engine, _sound) = create_engine_with_seconds(90);
            engine.switch_mode();
            assert_eq!(engine.snapshot().mode, TimerMode::Stopwatch);
            assert_eq!(engine.snapshot().seconds, 0);

            engine.switch_mode();
            assert_eq!(engine.snapshot().mode, TimerMode::Countdown);
            assert_eq!(engine.snapshot().seconds, 90);
        }

        #[test]
        fn test_switch_mode_stops_running_clock() {
            let mut engine = create_engine();
            engine.toggle_timer();
            engine.switch_mode();
            assert!(!engine.snapshot().is_running);
            assert_eq!(engine.scheduler().active(TimerKind::Tick), 0);

            engine.advance(3 * SECOND);
            assert_eq!(engine.snapshot().seconds, 0);
        }
    }

    // ------------------------------------------------------------------------
    // Tick Tests
    // ------------------------------------------------------------------------

    mod tick_tests {
        use super::*;

        #[test]
        fn test_countdown_reaches_zero_once() {
            let (mut engine, sound) = create_engine_with_seconds(3);
            engine.toggle_timer();

            let mut seen = Vec::new();
            for _ in 0..3 {
                engine.advance(SECOND);
                seen.push(engine.snapshot().seconds);
            }

            assert_eq!(seen, vec![2, 1, 0]);
            assert!(!engine.snapshot().is_running);
            assert_eq!(sound.notify_count(), 1);

            engine.advance(10 * SECOND);
            assert_eq!(engine.snapshot().seconds, 0);
            assert_eq!(sound.notify_count(), 1);
            assert_eq!(engine.scheduler().active(TimerKind::Tick), 0);
        }

        #[test]
        fn test_stopwatch_counts_up() {
            let (mut engine, sound) = create_engine_with_seconds(3);
            engine.switch_mode();
            engine.toggle_timer();

            engine.advance(SECOND);
            assert_eq!(engine.snapshot().seconds, 1);
            engine.advance(SECOND);
            assert_eq!(engine.snapshot().seconds, 2);
            engine.advance(100 * SECOND);
            assert_eq!(engine.snapshot().seconds, 102);
            assert_eq!(sound.notify_count(), 0);
        }

        #[test]
        fn test_partial_second_does_not_tick() {
            let (mut engine, _sound) = create_engine_with_seconds(10);
            engine.toggle_timer();
            engine.advance(Duration::from_millis(999));
            assert_eq!(engine.snapshot().seconds, 10);
        }

        #[test]
        fn test_rapid_toggle_leaves_one_tick() {
            let (mut engine, _sound) = create_engine_with_seconds(10);
            engine.toggle_timer();
            engine.toggle_timer();
            engine.toggle_timer();
            assert_eq!(engine.scheduler().active(TimerKind::Tick), 1);

            engine.advance(SECOND);
            assert_eq!(engine.snapshot().seconds, 9);

            engine.toggle_timer();
            assert_eq!(engine.scheduler().active(TimerKind::Tick), 0);
        }

        #[test]
        fn test_stale_tick_is_dropped() {
            let (mut engine, _sound) = create_engine_with_seconds(10);
            engine.toggle_timer();
            let stale = engine.tick.unwrap();
            engine.toggle_timer();
            engine.toggle_timer();

            engine.on_fired(Fired {
                kind: TimerKind::Tick,
                token: stale,
            });
            assert_eq!(engine.snapshot().seconds, 10);
        }

        #[test]
        fn test_notify_failure_does_not_affect_state() {
            let (mut engine, sound) = create_engine_with_seconds(1);
            sound.set_should_fail(true);
            engine.toggle_timer();
            engine.advance(SECOND);

            assert_eq!(engine.snapshot().seconds, 0);
            assert!(!engine.snapshot().is_running);
            assert_eq!(sound.notify_count(), 1);
        }
    }

    // ------------------------------------------------------------------------
    // Edit Tests
    // ------------------------------------------------------------------------

    mod edit_tests {
        use super::*;

        #[test]
        fn test_adjust_minutes() {
            let (mut engine, sound) = create_engine_with_seconds(90);
            engine.adjust_time(true);

            let snap = engine.snapshot();
            assert_eq!(snap.seconds, 150);
            assert_eq!(snap.initial_duration, 150);
            assert_eq!(snap.flash_scope, Some(EditScope::Minutes));
            assert_eq!(sound.click_count(), 1);
        }

        #[test]
        fn test_adjust_seconds_wraps() {
            let (mut engine, _sound) = create_engine_with_seconds(2 * 60 + 59);
            engine.toggle_edit_scope();
            engine.adjust_time(true);
            assert_eq!(engine.snapshot().parts(), (2, 0));

            engine.adjust_time(false);
            assert_eq!(engine.snapshot().parts(), (2, 59));
        }

        #[test]
        fn test_adjust_ignored_while_running() {
            let (mut engine, sound) = create_engine_with_seconds(90);
            engine.toggle_timer();
            engine.adjust_time(true);

            assert_eq!(engine.snapshot().seconds, 90);
            assert_eq!(engine.snapshot().flash_scope, None);
            assert_eq!(sound.click_count(), 0);
        }

        #[test]
        fn test_adjust_ignored_in_stopwatch() {
            let (mut engine, sound) = create_engine_with_seconds(90);
            engine.switch_mode();
            engine.adjust_time(true);
            assert_eq!(engine.snapshot().seconds, 0);
            assert_eq!(sound.click_count(), 0);
        }

        #[test]
        fn test_flash_clears_after_window() {
            let (mut engine, _sound) = create_engine_with_seconds(90);
            engine.adjust_time(true);

            engine.advance(Duration::from_millis(149));
            assert_eq!(engine.snapshot().flash_scope, Some(EditScope::Minutes));

            engine.advance(Duration::from_millis(1));
            assert_eq!(engine.snapshot().flash_scope, None);
        }

        #[test]
        fn test_flash_retriggers() {
            let (mut engine, _sound) = create_engine_with_seconds(90);
            engine.adjust_time(true);
            engine.advance(Duration::from_millis(100));
            engine.toggle_edit_scope();
            engine.adjust_time(true);

            engine.advance(Duration::from_millis(100));
            assert_eq!(engine.snapshot().flash_scope, Some(EditScope::Seconds));
            assert_eq!(engine.scheduler().active(TimerKind::FlashClear), 1);

            engine.advance(Duration::from_millis(50));
            assert_eq!(engine.snapshot().flash_scope, None);
        }

        #[test]
        fn test_edited_value_becomes_reset_target() {
            let (mut engine, _sound) = create_engine_with_seconds(90);
            engine.adjust_time(false);
            engine.toggle_timer();
            engine.advance(5 * SECOND);
            engine.reset();
            assert_eq!(engine.snapshot().seconds, 30);
        }

        #[test]
        fn test_edit_down_to_zero_blocks_start() {
            let (mut engine, _sound) = create_engine_with_seconds(60);
            engine.adjust_time(false);
            assert_eq!(engine.snapshot().seconds, 0);

            engine.toggle_timer();
            assert!(!engine.snapshot().is_running);
        }
    }

    // ------------------------------------------------------------------------
    // Auto-hide Tests
    // ------------------------------------------------------------------------

    mod auto_hide_tests {
        use super::*;

        #[test]
        fn test_hides_after_inactivity() {
            let mut engine = create_engine();
            engine.toggle_timer();
            assert!(engine.snapshot().ui_visible);

            engine.advance(3 * SECOND);
            assert!(!engine.snapshot().ui_visible);
        }

        #[test]
        fn test_activity_restarts_countdown() {
            let mut engine = create_engine();
            engine.toggle_timer();
            engine.advance(2 * SECOND);
            engine.pointer_moved();
            engine.advance(2 * SECOND);
            assert!(engine.snapshot().ui_visible);

            engine.advance(SECOND);
            assert!(!engine.snapshot().ui_visible);

            engine.handle_key(Key::Char('x'));
            assert!(engine.snapshot().ui_visible);
            assert_eq!(engine.scheduler().active(TimerKind::AutoHide), 1);
        }

        #[test]
        fn test_pause_forces_visible() {
            let mut engine = create_engine();
            engine.toggle_timer();
            engine.advance(4 * SECOND);
            assert!(!engine.snapshot().ui_visible);

            engine.toggle_timer();
            assert!(engine.snapshot().ui_visible);
            assert_eq!(engine.scheduler().active(TimerKind::AutoHide), 0);
        }

        #[test]
        fn test_activity_while_paused_schedules_nothing() {
            let mut engine = create_engine();
            engine.pointer_moved();
            assert_eq!(engine.scheduler().active_total(), 0);
        }

        #[test]
        fn test_unhide_forces_visible() {
            let mut engine = create_engine();
            engine.toggle_timer();
            engine.toggle_ui_hidden();
            engine.advance(4 * SECOND);
            assert!(!engine.snapshot().ui_visible);

            engine.toggle_ui_hidden();
            assert!(engine.snapshot().ui_visible);
        }

        #[test]
        fn test_user_hidden_wins_over_activity() {
            let mut engine = create_engine();
            engine.toggle_ui_hidden();
            engine.toggle_timer();
            engine.pointer_moved();
            assert!(!engine.snapshot().ui_visible);
        }
    }

    // ------------------------------------------------------------------------
    // Dispatch Tests
    // ------------------------------------------------------------------------

    mod dispatch_tests {
        use super::*;

        #[test]
        fn test_key_dispatch() {
            let display = Arc::new(MockDisplayController::new());
            let mut engine = create_engine().with_display(display.clone());

            assert_eq!(
                engine.handle_key(Key::Space),
                Dispatch::Handled(Command::ToggleTimer)
            );
            assert!(engine.snapshot().is_running);

            engine.handle_key(Key::Char('R'));
            assert!(!engine.snapshot().is_running);

            engine.handle_key(Key::Char('t'));
            engine.handle_key(Key::Char('C'));
            assert_eq!(engine.snapshot().font_index, 1);
            assert_eq!(engine.snapshot().theme_index, 1);

            engine.handle_key(Key::Char('f'));
            assert_eq!(display.toggle_count(), 1);

            engine.handle_key(Key::Right);
            assert_eq!(engine.snapshot().edit_scope, EditScope::Seconds);

            engine.handle_key(Key::Down);
            assert_eq!(engine.snapshot().seconds, 25 * 60 + 59);

            engine.handle_key(Key::Char('h'));
            assert!(!engine.snapshot().ui_visible);

            engine.handle_key(Key::Char('s'));
            assert_eq!(engine.snapshot().mode, TimerMode::Stopwatch);
        }

        #[test]
        fn test_quit_and_ignored() {
            let mut engine = create_engine();
            assert_eq!(engine.handle_key(Key::Char('q')), Dispatch::Quit);
            assert_eq!(engine.handle_key(Key::Interrupt), Dispatch::Quit);
            assert_eq!(engine.handle_key(Key::Other), Dispatch::Ignored);
            assert_eq!(engine.snapshot(), create_engine().snapshot());
        }

        #[test]
        fn test_fullscreen_failure_is_swallowed() {
            let display = Arc::new(MockDisplayController::new());
            display.set_should_fail(true);
            let mut engine = create_engine().with_display(display.clone());
            let before = engine.snapshot();

            engine.toggle_fullscreen();
            assert_eq!(engine.snapshot(), before);
            assert_eq!(display.toggle_count(), 1);
        }

        #[test]
        fn test_fullscreen_without_controller() {
            let mut engine = create_engine();
            engine.toggle_fullscreen();
            assert!(!engine.snapshot().is_running);
        }

        #[test]
        fn test_debug_impl() {
            let engine = create_engine();
            assert!(format!("{:?}", engine).contains("TimerEngine"));
        }

        #[test]
        fn test_state_mut_for_tick_edge() {
            let mut engine = create_engine();
            engine.toggle_timer();
            engine.get_state_mut().seconds = 1;
            engine.advance(SECOND);
            assert_eq!(engine.get_state().seconds, 0);
            assert!(!engine.get_state().is_running);
        }
    }
}
