//! Simple line-based CLI output utilities.

use crate::app::{HomeView, ScreenView};
use crate::error::SyncError;
use crate::models::{Post, Profile};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Print the main header.
///
/// ```text
/// LIN US (@linus)
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_header(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "═".repeat(LINE_WIDTH));
}

/// Header line for a profile, or a placeholder while none is loaded.
pub fn profile_title(profile: Option<&Profile>) -> String {
    match profile {
        Some(profile) if profile.username.is_empty() => profile.display_name().to_uppercase(),
        Some(profile) => format!(
            "{} (@{})",
            profile.display_name().to_uppercase(),
            profile.username
        ),
        None => "PROFILE".to_string(),
    }
}

/// Render a post list, one line per post.
///
/// ```text
///   #3    $12.50  Desk lamp
///         barely used
/// ```
pub fn render_posts(posts: &[Post], show_captions: bool) -> Vec<String> {
    if posts.is_empty() {
        return vec!["  (nothing here yet)".to_string()];
    }
    let mut lines = Vec::with_capacity(posts.len());
    for post in posts {
        lines.push(format!(
            "  #{:<4} {:>9}  {}",
            post.id,
            post.price_label(),
            post.title
        ));
        if show_captions {
            if let Some(caption) = post.caption.as_deref().filter(|c| !c.is_empty()) {
                lines.push(format!("        {}", caption));
            }
        }
    }
    lines
}

/// Error line for the banner.
pub fn render_error(err: &SyncError) -> String {
    format!(
        "{} [{}] {}",
        icons::FAILURE,
        err.error_code(),
        err.user_message()
    )
}

/// Print the profile screen.
pub fn print_profile_screen(view: &ScreenView<'_>) {
    print_header(&profile_title(view.profile));
    println!("{}", view.mode.label().to_uppercase());
    println!("{}", "─".repeat(LINE_WIDTH));
    for line in render_posts(view.posts, false) {
        println!("{}", line);
    }
    print_footer(view.posts.len(), view.error);
}

/// Print the home feed.
pub fn print_home_screen(view: &HomeView<'_>) {
    print_header("HOME");
    for line in render_posts(view.posts, true) {
        println!("{}", line);
    }
    print_footer(view.posts.len(), view.error);
}

fn print_footer(count: usize, error: Option<&SyncError>) {
    println!("{}", "═".repeat(LINE_WIDTH));
    match error {
        Some(err) => println!("{}", render_error(err)),
        None => println!("{} {} post(s)", icons::SUCCESS, count),
    }
}

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
}
