/// Markup contract and timing for the page behaviors.
///
/// Every selector, class name and id the page script touches lives here so
/// the host HTML and the wasm module can be kept in sync from one place.

// Scroll reveal
pub const REVEAL_SELECTORS: &str = ".glass-card, .section-heading, .eyebrow, .pill, p, h1, h2, h3";
pub const REVEAL_PENDING_CLASS: &str = "reveal-on-scroll";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element that must be visible
pub const REVEAL_ROOT_MARGIN: &str = "0px";

// Score cycling
pub const SCORE_ATTR: &str = "data-score";
pub const SCORE_INTERVAL_MS: i32 = 4000;

// Mutation viewer
pub const MUTATION_BUTTON_SELECTOR: &str = ".mutation-btn";
pub const MUTATION_ATTR: &str = "data-mutation";
pub const MUTATION_LABEL_ID: &str = "mutation-label";
pub const RESIDUE_VISUAL_ID: &str = "residue-visual";
pub const BUTTON_ACTIVE_CLASS: &str = "active";
pub const BUTTON_ACTIVE_BG_CLASS: &str = "bg-slate-300";
pub const BUTTON_IDLE_BG_CLASS: &str = "bg-slate-100";
