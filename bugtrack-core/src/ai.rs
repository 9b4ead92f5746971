//! Static text for the detail page's "AI Summary" and "AI Suggestions" panels.
//!
//! There is no model behind these; they are fixed placeholder copy.

/// One entry in the suggestions panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub title: &'static str,
    pub body: &'static str,
}

const SUMMARY: &str = "This appears to be a critical UI issue affecting user authentication. \
The login button's click event handler may not be properly attached, preventing users from \
accessing their accounts. Immediate investigation of JavaScript console errors and event \
binding is recommended.";

const SUGGESTIONS: [Suggestion; 2] = [
    Suggestion {
        title: "Check Event Handlers",
        body: "Check if the click event listener is properly attached to the login button. \
Verify that the JavaScript is loading correctly and there are no console errors.",
    },
    Suggestion {
        title: "Review Form Submission",
        body: "Ensure the form submission handler is preventing default behavior and properly \
processing the authentication request.",
    },
];

/// Placeholder summary shown above the description
pub fn summary_placeholder() -> &'static str {
    SUMMARY
}

/// Placeholder suggestions revealed by the "Get AI Suggestions" toggle
pub fn suggestions_placeholder() -> &'static [Suggestion] {
    &SUGGESTIONS
}
