use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Creates and configures a spinner-style progress bar shown while the
/// directory walk is in flight.
///
/// The spinner updates every 500 milliseconds and cycles through a sequence of dots to indicate activity.
///
/// # Arguments
///
/// * `message` - A static string slice used as the message prefix displayed alongside the spinner.
///
/// # Returns
///
/// * `ProgressBar` - A configured `ProgressBar` spinner instance ready for use.
///
/// # Example
///
/// ```
/// use seekrs::cmd::progress_bar::create_spinner;
/// let pb = create_spinner("Searching");
/// pb.finish_and_clear();
/// ```
pub fn create_spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(500)); // update spinner every 500ms
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[".", "..", "...", "...."])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    pb
}
