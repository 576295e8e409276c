//! Animated terminal spinner with an optional message and progress counter.
//!
//! The animation runs on its own thread. Every read or write of the spinner
//! state, from the caller or from the animation thread, happens under one
//! lock, so frames never interleave with updates or with the final erase.
//!
//! ```no_run
//! use termkit::spinner::{Spinner, SpinnerConfig};
//!
//! let spinner = Spinner::new(
//!     SpinnerConfig::new()
//!         .with_count(3)
//!         .with_start_message("Fetching")
//!         .with_stop_message("Fetched 3 repos"),
//! );
//! spinner.start();
//! for repo in ["a", "b", "c"] {
//!     // ... do work ...
//!     spinner.inc_with_message_fmt(format_args!("Fetched {repo}"));
//! }
//! spinner.stop();
//! ```
//!
//! A frame looks like `\r⠹ Fetched b (2/3) `. The `(completed/count)` suffix
//! is only shown when the count is greater than one.
//!
//! The terminal only ever shows the latest message. When a debug sink is
//! configured, every message that was shown is also written there, one per
//! line, so the full history survives the erasing.

use parking_lot::Mutex;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Glyphs cycled through by the animation, in order.
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Default time between frames.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Default maximum message length, in characters.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 80;

const TRUNCATION_MARKER: &str = "...";

/// A write destination for spinner output.
pub type Sink = Box<dyn Write + Send>;

/// Spinner configuration, passed once to [`Spinner::new`].
pub struct SpinnerConfig {
    /// Time between frames. Default: 100ms.
    pub interval: Duration,
    /// Where frames are written. Default: stderr.
    pub output: Sink,
    /// Receives every message the spinner has shown. Default: none.
    pub debug_output: Option<Sink>,
    /// Message shown as soon as the spinner starts.
    pub start_message: String,
    /// Message that replaces the spinner when it stops.
    pub stop_message: String,
    /// Total number of items tracked. Progress is shown when greater than 1.
    pub count: usize,
    /// Longer messages are truncated and marked with `...`. Default: 80.
    pub max_message_length: usize,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            output: Box::new(io::stderr()),
            debug_output: None,
            start_message: String::new(),
            stop_message: String::new(),
            // Progress against a single item is not worth showing
            count: 1,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

impl SpinnerConfig {
    /// Configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time between frames.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Write frames to `output` instead of stderr.
    pub fn with_output(mut self, output: impl Write + Send + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Keep a log of every shown message in `debug_output`.
    pub fn with_debug_output(mut self, debug_output: impl Write + Send + 'static) -> Self {
        self.debug_output = Some(Box::new(debug_output));
        self
    }

    /// Message applied when the spinner starts.
    pub fn with_start_message(mut self, message: impl Into<String>) -> Self {
        self.start_message = message.into();
        self
    }

    /// Message printed in place of the spinner when it stops.
    pub fn with_stop_message(mut self, message: impl Into<String>) -> Self {
        self.stop_message = message.into();
        self
    }

    /// Total number of items to track.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Maximum message length before truncation.
    pub fn with_max_message_length(mut self, len: usize) -> Self {
        self.max_message_length = len;
        self
    }
}

impl fmt::Debug for SpinnerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinnerConfig")
            .field("interval", &self.interval)
            .field("debug_output", &self.debug_output.is_some())
            .field("start_message", &self.start_message)
            .field("stop_message", &self.stop_message)
            .field("count", &self.count)
            .field("max_message_length", &self.max_message_length)
            .finish_non_exhaustive()
    }
}

/// An animated progress indicator.
///
/// All methods take `&self` and never fail. Calling [`Spinner::start`] on a
/// running spinner or incrementing past the count does nothing, and
/// [`Spinner::stop`] on a stopped one writes nothing to the output.
///
/// Dropping the spinner stops it.
pub struct Spinner {
    shared: Arc<Shared>,
}

struct Shared {
    interval: Duration,
    state: Mutex<State>,
    stop_tx: flume::Sender<()>,
    stop_rx: flume::Receiver<()>,
}

struct State {
    out: Sink,
    debug_out: Option<Sink>,
    active: bool,
    /// Bumped on every start so a frame loop from an earlier run cannot
    /// keep rendering after a restart.
    generation: u64,
    /// Either empty or starting with a single space.
    msg: String,
    pending_debug: Vec<String>,
    last_output: String,
    erase_buf: Vec<u8>,
    count: usize,
    completed: usize,
    max_msg_len: usize,
    start_msg: String,
    stop_msg: String,
}

impl Spinner {
    /// Create a stopped spinner.
    pub fn new(config: SpinnerConfig) -> Self {
        let (stop_tx, stop_rx) = flume::bounded(1);
        Self {
            shared: Arc::new(Shared {
                interval: config.interval,
                state: Mutex::new(State::new(config)),
                stop_tx,
                stop_rx,
            }),
        }
    }

    /// Start the animation. Does nothing if already running.
    pub fn start(&self) {
        let mut state = self.shared.state.lock();
        if state.active {
            return;
        }
        state.active = true;
        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;
        let start_msg = state.start_msg.clone();
        state.set_msg(&start_msg);
        // Discard a signal the previous frame loop exited without reading
        while self.shared.stop_rx.try_recv().is_ok() {}
        drop(state);

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("termkit-spinner".to_string())
            .spawn(move || shared.run(generation));
        match spawned {
            Ok(_) => log::debug!("spinner started"),
            Err(e) => {
                log::warn!("failed to spawn spinner thread: {e}");
                self.shared.state.lock().abandon(generation);
            }
        }
    }

    /// Stop the animation, erase the spinner and print the stop message.
    ///
    /// When not running, nothing is written to the output. Message history
    /// recorded while stopped is still flushed to the debug sink.
    ///
    /// No frame is rendered after this returns.
    pub fn stop(&self) {
        let mut state = self.shared.state.lock();
        if !state.active {
            let last = std::mem::take(&mut state.msg);
            state.retire(&last);
            state.flush_debug();
            return;
        }
        state.active = false;
        // A full slot means a signal is already waiting
        let _ = self.shared.stop_tx.try_send(());

        // The last message was never followed by another frame
        let last = std::mem::take(&mut state.msg);
        state.retire(&last);
        state.erase();
        state.write_stop_message();
        log::debug!("spinner stopped");
    }

    /// Mark one more item as completed.
    pub fn inc(&self) {
        self.inc_with_message("");
    }

    /// Mark one more item as completed and show `msg`.
    ///
    /// Does nothing once the count is reached, including not updating the
    /// message.
    pub fn inc_with_message(&self, msg: &str) {
        let mut state = self.shared.state.lock();
        if state.completed >= state.count {
            return;
        }
        state.completed += 1;
        state.set_msg(msg);
    }

    /// Like [`Spinner::inc_with_message`] with a formatted message.
    pub fn inc_with_message_fmt(&self, args: fmt::Arguments<'_>) {
        self.inc_with_message(&args.to_string());
    }

    /// Record `msg` in the debug log without showing it.
    ///
    /// Lines are written on the next frame or on [`Spinner::stop`]. Does
    /// nothing when no debug sink is configured.
    pub fn debug(&self, msg: impl Into<String>) {
        let mut state = self.shared.state.lock();
        if state.debug_out.is_none() {
            return;
        }
        let msg = msg.into();
        state.pending_debug.push(strip_line_terminator(&msg).to_string());
    }

    /// Like [`Spinner::debug`] with a formatted message.
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.debug(args.to_string());
    }

    /// Whether the animation is running.
    pub fn is_active(&self) -> bool {
        self.shared.state.lock().active
    }

    /// Number of completed items.
    pub fn completed(&self) -> usize {
        self.shared.state.lock().completed
    }

    /// Total number of items.
    pub fn count(&self) -> usize {
        self.shared.state.lock().count
    }

    /// The current message, without the padding space.
    pub fn message(&self) -> String {
        let state = self.shared.state.lock();
        state.msg.strip_prefix(' ').unwrap_or(&state.msg).to_string()
    }
}

impl fmt::Debug for Spinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Spinner")
            .field("interval", &self.shared.interval)
            .field("active", &state.active)
            .field("completed", &state.completed)
            .field("count", &state.count)
            .field("msg", &state.msg)
            .finish_non_exhaustive()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Shared {
    /// Frame loop. Exits on a stop signal, or when the spinner was stopped
    /// or restarted since this loop was spawned.
    fn run(&self, generation: u64) {
        for frame in FRAMES.iter().cycle() {
            if self.stop_rx.try_recv().is_ok() {
                return;
            }
            {
                let mut state = self.state.lock();
                if !state.active || state.generation != generation {
                    return;
                }
                state.render(frame);
            }
            thread::sleep(self.interval);
        }
    }
}

impl State {
    fn new(config: SpinnerConfig) -> Self {
        Self {
            out: config.output,
            debug_out: config.debug_output,
            active: false,
            generation: 0,
            msg: String::new(),
            pending_debug: Vec::new(),
            last_output: String::new(),
            erase_buf: Vec::new(),
            count: config.count,
            completed: 0,
            max_msg_len: config.max_message_length,
            start_msg: config.start_message,
            stop_msg: config.stop_message,
        }
    }

    /// Replace the current message. Empty messages are ignored.
    fn set_msg(&mut self, msg: &str) {
        let msg = strip_line_terminator(msg);
        if msg.is_empty() {
            return;
        }

        let mut next = String::with_capacity(msg.len() + 1 + TRUNCATION_MARKER.len());
        if !msg.starts_with(' ') {
            next.push(' ');
        }
        match msg.char_indices().nth(self.max_msg_len) {
            Some((cut, _)) => {
                next.push_str(&msg[..cut]);
                next.push_str(TRUNCATION_MARKER);
            }
            None => next.push_str(msg),
        }

        let prev = std::mem::replace(&mut self.msg, next);
        self.retire(&prev);
    }

    /// Undo a start whose frame loop never ran.
    fn abandon(&mut self, generation: u64) {
        if self.generation == generation {
            self.active = false;
        }
    }

    /// Queue a message that is no longer shown for the debug log.
    fn retire(&mut self, msg: &str) {
        if self.debug_out.is_none() {
            return;
        }
        let msg = msg.strip_prefix(' ').unwrap_or(msg);
        if !msg.is_empty() {
            self.pending_debug.push(msg.to_string());
        }
    }

    /// Erase the previous frame and draw `frame` with the current message.
    fn render(&mut self, frame: &str) {
        self.erase();

        self.last_output.push('\r');
        self.last_output.push_str(frame);
        self.last_output.push_str(&self.msg);
        self.last_output.push(' ');
        if self.count > 1 {
            let _ = write!(self.last_output, "({}/{}) ", self.completed, self.count);
        }
        write_sink(&mut self.out, self.last_output.as_bytes());
    }

    /// Remove the last frame from the terminal and flush pending debug
    /// messages.
    fn erase(&mut self) {
        let n = self.last_output.chars().count();
        erase_sequence(&mut self.erase_buf, n, cfg!(windows));
        write_sink(&mut self.out, &self.erase_buf);
        self.last_output.clear();
        self.flush_debug();
    }

    /// Write pending debug messages, one per line.
    fn flush_debug(&mut self) {
        if let Some(debug_out) = self.debug_out.as_mut() {
            for msg in self.pending_debug.drain(..) {
                let _ = writeln!(debug_out, "{msg}")
                    .inspect_err(|e| log::trace!("spinner debug write failed: {e}"));
            }
            let _ = debug_out.flush();
        }
    }

    fn write_stop_message(&mut self) {
        if self.stop_msg.is_empty() {
            return;
        }
        let mut line = std::mem::take(&mut self.stop_msg);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        write_sink(&mut self.out, line.as_bytes());
        self.stop_msg = line;
    }
}

/// Fill `buf` with the bytes that erase `n` characters before the cursor.
///
/// Without ANSI support the line is overwritten with spaces. Otherwise
/// backspace, delete, backspace and clear-to-end-of-line are each repeated
/// `n` times.
fn erase_sequence(buf: &mut Vec<u8>, n: usize, pad_with_spaces: bool) {
    buf.clear();
    if pad_with_spaces {
        buf.push(b'\r');
        buf.resize(n + 1, b' ');
        buf.push(b'\r');
        return;
    }
    let seqs: [&[u8]; 4] = [b"\x08", b"\x7f", b"\x08", b"\x1b[K"];
    for seq in seqs {
        for _ in 0..n {
            buf.extend_from_slice(seq);
        }
    }
    buf.extend_from_slice(b"\r\x1b[K");
}

/// Write and flush, ignoring failures: the spinner must never break the
/// program it decorates.
fn write_sink(out: &mut Sink, bytes: &[u8]) {
    if let Err(e) = out.write_all(bytes).and_then(|()| out.flush()) {
        log::trace!("spinner write failed: {e}");
    }
}

fn strip_line_terminator(msg: &str) -> &str {
    match msg.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => msg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// In-memory sink that can be read while the spinner owns a clone.
    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }

        fn is_empty(&self) -> bool {
            self.0.lock().is_empty()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // Long enough that only the first frame renders during a test
    const SLOW: Duration = Duration::from_secs(30);

    fn quiet_config() -> (SpinnerConfig, Buffer) {
        let out = Buffer::default();
        let config = SpinnerConfig::new()
            .with_interval(SLOW)
            .with_output(out.clone());
        (config, out)
    }

    fn wait_for(mut cond: impl FnMut() -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !cond() {
            assert!(Instant::now() < deadline, "condition not met in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = SpinnerConfig::default();
        assert_eq!(config.interval, Duration::from_millis(100));
        assert_eq!(config.count, 1);
        assert_eq!(config.max_message_length, 80);
        assert!(config.debug_output.is_none());
        assert!(config.start_message.is_empty());
        assert!(config.stop_message.is_empty());
    }

    #[test]
    fn test_new_spinner_is_inactive() {
        let (config, out) = quiet_config();
        let spinner = Spinner::new(config);
        assert!(!spinner.is_active());
        assert_eq!(spinner.completed(), 0);
        assert_eq!(spinner.count(), 1);
        drop(spinner);
        assert!(out.is_empty());
    }

    #[test]
    fn test_start_is_idempotent() {
        let (config, _out) = quiet_config();
        let spinner = Spinner::new(config.with_start_message("working"));
        spinner.start();
        spinner.start();
        spinner.start();
        assert!(spinner.is_active());
        assert_eq!(spinner.shared.state.lock().generation, 1);
        assert_eq!(spinner.message(), "working");
        spinner.stop();
    }

    #[test]
    fn test_concurrent_start_spawns_one_loop() {
        let (config, _out) = quiet_config();
        let spinner = Spinner::new(config);
        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| spinner.start());
            }
        });
        assert!(spinner.is_active());
        assert_eq!(spinner.shared.state.lock().generation, 1);
        spinner.stop();
    }

    #[test]
    fn test_failed_spawn_allows_restart() {
        let (config, _out) = quiet_config();
        let spinner = Spinner::new(config);
        spinner.start();
        spinner.shared.state.lock().abandon(1);
        assert!(!spinner.is_active());

        spinner.start();
        assert!(spinner.is_active());
        assert_eq!(spinner.shared.state.lock().generation, 2);
        spinner.stop();
    }

    #[test]
    fn test_abandon_ignores_newer_start() {
        let (config, _out) = quiet_config();
        let mut state = State::new(config);
        state.active = true;
        state.generation = 3;
        state.abandon(2);
        assert!(state.active);
    }

    #[test]
    fn test_stop_when_inactive_writes_nothing() {
        let (config, out) = quiet_config();
        let spinner = Spinner::new(config.with_stop_message("done"));
        spinner.stop();
        spinner.stop();
        assert!(out.is_empty());
    }

    #[test]
    fn test_stop_twice_writes_stop_message_once() {
        let (config, out) = quiet_config();
        let spinner = Spinner::new(config.with_stop_message("done"));
        spinner.start();
        spinner.stop();
        spinner.stop();
        assert_eq!(out.contents().matches("done").count(), 1);
    }

    #[test]
    fn test_stop_message_replaces_spinner() {
        let (config, out) = quiet_config();
        let spinner = Spinner::new(
            config
                .with_start_message("working")
                .with_stop_message("done"),
        );
        spinner.start();
        spinner.stop();
        assert!(!spinner.is_active());

        let contents = out.contents();
        assert!(contents.ends_with("done\n"), "got {contents:?}");
        if cfg!(not(windows)) {
            assert!(contents.ends_with("\r\x1b[Kdone\n"), "got {contents:?}");
        }
    }

    #[test]
    fn test_stop_message_keeps_existing_newline() {
        let (config, out) = quiet_config();
        let spinner = Spinner::new(config.with_stop_message("done\n"));
        spinner.start();
        spinner.stop();
        assert!(out.contents().ends_with("done\n"));
        assert!(!out.contents().ends_with("done\n\n"));
    }

    #[test]
    fn test_no_frames_after_stop() {
        let out = Buffer::default();
        let spinner = Spinner::new(
            SpinnerConfig::new()
                .with_interval(Duration::from_millis(1))
                .with_output(out.clone())
                .with_stop_message("done"),
        );
        spinner.start();
        wait_for(|| out.contents().contains('⠋'));
        spinner.stop();

        let after_stop = out.contents();
        thread::sleep(Duration::from_millis(30));
        assert_eq!(out.contents(), after_stop);
        assert!(after_stop.ends_with("done\n"));
    }

    #[test]
    fn test_inc_stops_at_count() {
        let (config, _out) = quiet_config();
        let spinner = Spinner::new(config.with_count(3));
        spinner.inc();
        spinner.inc();
        spinner.inc();
        assert_eq!(spinner.completed(), 3);
        spinner.inc();
        assert_eq!(spinner.completed(), 3);
    }

    #[test]
    fn test_inc_past_count_keeps_message() {
        let (config, _out) = quiet_config();
        let spinner = Spinner::new(config);
        spinner.inc_with_message("first");
        spinner.inc_with_message("second");
        assert_eq!(spinner.completed(), 1);
        assert_eq!(spinner.message(), "first");
    }

    #[test]
    fn test_inc_with_message_fmt() {
        let (config, _out) = quiet_config();
        let spinner = Spinner::new(config.with_count(2));
        spinner.inc_with_message_fmt(format_args!("built {} of {}", 1, 2));
        assert_eq!(spinner.message(), "built 1 of 2");
    }

    #[test]
    fn test_concurrent_inc() {
        let (config, _out) = quiet_config();
        let spinner = Spinner::new(config.with_count(1000));
        spinner.start();
        thread::scope(|s| {
            for _ in 0..2 {
                s.spawn(|| {
                    for _ in 0..500 {
                        spinner.inc();
                    }
                });
            }
        });
        assert_eq!(spinner.completed(), 1000);
        spinner.stop();
    }

    #[test]
    fn test_concurrent_inc_never_overshoots() {
        let (config, _out) = quiet_config();
        let spinner = Spinner::new(config.with_count(1000));
        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for i in 0..400 {
                        spinner.inc_with_message_fmt(format_args!("item {i}"));
                    }
                });
            }
        });
        assert_eq!(spinner.completed(), 1000);
    }

    #[test]
    fn test_message_truncated() {
        let (config, _out) = quiet_config();
        let mut state = State::new(config.with_max_message_length(5));
        state.set_msg("abcdefgh");
        assert_eq!(state.msg, " abcde...");
    }

    #[test]
    fn test_message_at_limit_untouched() {
        let (config, _out) = quiet_config();
        let mut state = State::new(config.with_max_message_length(5));
        state.set_msg("abcde");
        assert_eq!(state.msg, " abcde");
    }

    #[test]
    fn test_message_truncation_counts_chars() {
        let (config, _out) = quiet_config();
        let mut state = State::new(config.with_max_message_length(3));
        state.set_msg("héllo wörld");
        assert_eq!(state.msg, " hél...");
    }

    #[test]
    fn test_message_leading_space() {
        let (config, _out) = quiet_config();
        let mut state = State::new(config);
        state.set_msg("no space");
        assert_eq!(state.msg, " no space");
        state.set_msg(" one space");
        assert_eq!(state.msg, " one space");
    }

    #[test]
    fn test_message_line_terminator_stripped() {
        let (config, _out) = quiet_config();
        let mut state = State::new(config);
        state.set_msg("unix\n");
        assert_eq!(state.msg, " unix");
        state.set_msg("windows\r\n");
        assert_eq!(state.msg, " windows");
        state.set_msg("two\n\n");
        assert_eq!(state.msg, " two\n");
    }

    #[test]
    fn test_empty_message_ignored() {
        let (config, _out) = quiet_config();
        let mut state = State::new(config);
        state.set_msg("keep");
        state.set_msg("");
        state.set_msg("\n");
        assert_eq!(state.msg, " keep");
    }

    #[test]
    fn test_render_frame_with_progress() {
        let (config, out) = quiet_config();
        let mut state = State::new(config.with_count(3));
        state.completed = 1;
        state.set_msg("building");
        state.render(FRAMES[2]);
        assert_eq!(state.last_output, "\r⠹ building (1/3) ");
        assert!(out.contents().ends_with("\r⠹ building (1/3) "));
    }

    #[test]
    fn test_render_frame_single_item_hides_progress() {
        let (config, _out) = quiet_config();
        let mut state = State::new(config);
        state.render(FRAMES[0]);
        assert_eq!(state.last_output, "\r⠋ ");
        state.set_msg("hi");
        state.render(FRAMES[1]);
        assert_eq!(state.last_output, "\r⠙ hi ");
    }

    #[test]
    #[cfg(not(windows))]
    fn test_erase_sequences() {
        let (config, out) = quiet_config();
        let mut state = State::new(config);
        state.last_output = "\rab".to_string();
        state.erase();
        assert_eq!(
            out.contents(),
            "\x08\x08\x08\x7f\x7f\x7f\x08\x08\x08\x1b[K\x1b[K\x1b[K\r\x1b[K"
        );
        assert!(state.last_output.is_empty());
    }

    #[test]
    fn test_erase_sequence_ansi() {
        let mut buf = vec![b'x'];
        erase_sequence(&mut buf, 2, false);
        assert_eq!(buf, b"\x08\x08\x7f\x7f\x08\x08\x1b[K\x1b[K\r\x1b[K");
    }

    #[test]
    fn test_erase_sequence_spaces() {
        let mut buf = vec![b'x'];
        erase_sequence(&mut buf, 3, true);
        assert_eq!(buf, b"\r   \r");
        erase_sequence(&mut buf, 0, true);
        assert_eq!(buf, b"\r\r");
    }

    #[test]
    fn test_debug_history_in_order() {
        let (config, _out) = quiet_config();
        let debug = Buffer::default();
        let spinner = Spinner::new(config.with_count(3).with_debug_output(debug.clone()));
        spinner.start();
        spinner.inc_with_message("step1");
        spinner.inc_with_message("step2");
        spinner.stop();
        assert_eq!(debug.contents(), "step1\nstep2\n");
    }

    #[test]
    fn test_debug_history_flushed_without_start() {
        let (config, out) = quiet_config();
        let debug = Buffer::default();
        let spinner = Spinner::new(config.with_count(3).with_debug_output(debug.clone()));
        spinner.inc_with_message("step1");
        spinner.debug("note");
        spinner.inc_with_message("step2");
        spinner.stop();
        assert_eq!(debug.contents(), "step1\nnote\nstep2\n");
        assert!(out.is_empty());

        spinner.stop();
        assert_eq!(debug.contents(), "step1\nnote\nstep2\n");
    }

    #[test]
    fn test_debug_fmt_goes_to_debug_sink_only() {
        let (config, out) = quiet_config();
        let debug = Buffer::default();
        let spinner = Spinner::new(config.with_debug_output(debug.clone()));
        spinner.start();
        spinner.debug_fmt(format_args!("fetched {} items", 3));
        spinner.stop();
        assert_eq!(debug.contents(), "fetched 3 items\n");
        assert!(!out.contents().contains("fetched"));
        assert_eq!(spinner.message(), "");
    }

    #[test]
    fn test_debug_without_sink_is_noop() {
        let (config, _out) = quiet_config();
        let spinner = Spinner::new(config.with_count(2));
        spinner.debug("ignored");
        spinner.inc_with_message("a");
        spinner.inc_with_message("b");
        assert!(spinner.shared.state.lock().pending_debug.is_empty());
    }

    #[test]
    fn test_restart_replaces_frame_loop() {
        let out = Buffer::default();
        let spinner = Spinner::new(
            SpinnerConfig::new()
                .with_interval(Duration::from_millis(1))
                .with_output(out.clone()),
        );
        spinner.start();
        spinner.stop();
        spinner.start();
        assert!(spinner.is_active());
        assert_eq!(spinner.shared.state.lock().generation, 2);
        wait_for(|| out.contents().contains('⠋'));
        spinner.stop();
        assert!(!spinner.is_active());
    }

    #[test]
    fn test_drop_stops_spinner() {
        let (config, out) = quiet_config();
        let spinner = Spinner::new(config.with_stop_message("bye"));
        spinner.start();
        drop(spinner);
        assert!(out.contents().ends_with("bye\n"));
    }
}
