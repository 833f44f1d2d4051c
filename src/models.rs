// Static page content and the section vocabulary.
//
// Everything here is fixed configuration enumerated at build time. Nothing is
// mutated at runtime; the view layer reads these tables when building DOM.

/// The four navigable page sections, in vertical page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor id rendered on the section container. Each exists exactly once.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

pub struct SkillGroup {
    pub category: &'static str,
    pub icon: &'static str,
    pub image_path: &'static str,
    pub items: &'static [&'static str],
    pub description: &'static str,
}

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Full Stack Development",
        icon: "\u{2328}", // keyboard
        image_path: "/skills-icons.png",
        items: &["React/Next.js", "Node.js", "TypeScript", "Python"],
        description: "Building modern web applications with cutting-edge frameworks",
    },
    SkillGroup {
        category: "Programming Languages",
        icon: "\u{2699}", // gear
        image_path: "/languages-skills.png",
        items: &["C/C++", "Java", "JavaScript", "Go"],
        description: "Strong foundation in multiple programming paradigms",
    },
    SkillGroup {
        category: "Machine Learning",
        icon: "\u{1F9E0}", // brain
        image_path: "/ml-skills.png",
        items: &["TensorFlow", "PyTorch", "Scikit-learn", "Data Science"],
        description: "Developing intelligent solutions with advanced ML techniques",
    },
    SkillGroup {
        category: "Database & Tools",
        icon: "\u{1F5C4}", // file cabinet
        image_path: "/database-skills.png",
        items: &["PostgreSQL", "MongoDB", "Docker", "AWS"],
        description: "Managing data and deploying applications at scale",
    },
];

pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub link: &'static str,
    pub icon: &'static str,
}

pub const PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with real-time inventory management, \
                      payment processing, and AI-powered recommendations.",
        tech: &["Next.js", "TypeScript", "PostgreSQL", "Stripe"],
        features: &[
            "Real-time inventory",
            "AI recommendations",
            "Payment processing",
            "Admin dashboard",
        ],
        link: "#",
        icon: "\u{1F6D2}", // shopping cart
    },
    ProjectEntry {
        title: "ML-Powered Analytics Dashboard",
        description: "An intelligent analytics platform that uses machine learning to provide \
                      predictive insights and automated reporting.",
        tech: &["Python", "TensorFlow", "React", "FastAPI"],
        features: &[
            "Predictive analytics",
            "Automated reports",
            "Data visualization",
            "ML models",
        ],
        link: "#",
        icon: "\u{1F4CA}", // bar chart
    },
    ProjectEntry {
        title: "Real-Time Chat Application",
        description: "A scalable chat application with end-to-end encryption, video calling, \
                      and AI-powered message moderation.",
        tech: &["Node.js", "Socket.io", "WebRTC", "React"],
        features: &[
            "End-to-end encryption",
            "Video calls",
            "AI moderation",
            "File sharing",
        ],
        link: "#",
        icon: "\u{1F4AC}", // speech balloon
    },
];

pub struct ContactMethod {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub accent: &'static str,
}

impl ContactMethod {
    /// Mail opens in the current browsing context, everything else in a new one.
    pub fn opens_new_context(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        icon: "\u{2709}", // envelope
        label: "Get In Touch",
        href: "mailto:swarup@example.com",
        accent: "#2563eb",
    },
    ContactMethod {
        icon: "\u{1F419}", // octopus
        label: "GitHub",
        href: "https://github.com",
        accent: "#374151",
    },
    ContactMethod {
        icon: "\u{1F4BC}", // briefcase
        label: "LinkedIn",
        href: "https://linkedin.com",
        accent: "#1d4ed8",
    },
];

/// Social links rendered under the hero call-to-action buttons.
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("\u{1F419}", "https://github.com"),
    ("\u{1F4BC}", "https://linkedin.com"),
    ("\u{2709}", "mailto:swarup@example.com"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.anchor_id()).collect();
        assert_eq!(ids, vec!["about", "skills", "projects", "contact"]);
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b, "anchor ids must be unique");
            }
        }
    }

    #[test]
    fn only_mail_opens_in_current_context() {
        let current: Vec<&str> = CONTACT_METHODS
            .iter()
            .filter(|m| !m.opens_new_context())
            .map(|m| m.href)
            .collect();
        assert_eq!(current, vec!["mailto:swarup@example.com"]);
    }
}
