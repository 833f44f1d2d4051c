// Presentation constants - these are the single source of truth for the
// animation choreography and the navigation scroll threshold.

/// Scroll offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Period of the hero role rotation.
pub const ROLE_ROTATION_MS: u32 = 3_000;

/// Intersection ratio that arms a panel's one-shot reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Entrance stagger timing. Cards fan out first, then their badges.
pub const CARD_STAGGER_MS: u32 = 200;
pub const BADGE_STAGGER_MS: u32 = 100;
pub const BADGE_BASE_DELAY_MS: u32 = 600;
pub const TECH_BASE_DELAY_MS: u32 = 900;

/// Roles cycled in the hero headline, in display order.
pub const ROLES: &[&str] = &[
    "Full Stack Developer",
    "Machine Learning Engineer",
    "Problem Solver",
    "Tech Enthusiast",
];
