//! Static page content.

pub const NAME: &str = "Varshine T";
pub const INITIALS: &str = "VT";
pub const TAGLINE: &str =
    "Final-Year CSE Student | Aspiring Software Developer | Full-Stack Enthusiast";
pub const EMAIL: &str = "varshine12@gmail.com";
pub const RESUME_PATH: &str = "/Varshine_T_Resume.pdf";
pub const FAVICON_PATH: &str = "/favicon.svg";

pub const INTRO: &str = ", a Final-Year CSE student and Emerging Software Developer with a strong passion for technology and innovation. Proficient in React Native, React.js, Firebase, Python, and Java, I enjoy building solutions that address real-world challenges. My interests span AI, Full-Stack Development, and emerging technologies like AR/VR/XR.";
pub const CAREER_GOAL: &str = "Aspiring to be a Software Developer / Full-Stack Engineer, creating impactful products that merge technology with human needs.";

pub struct TechBadge {
    pub name: &'static str,
    pub color: &'static str,
}

pub const TECH_BADGES: &[TechBadge] = &[
    TechBadge { name: "React", color: "text-blue-500" },
    TechBadge { name: "Python", color: "text-green-500" },
    TechBadge { name: "Firebase", color: "text-orange-500" },
    TechBadge { name: "Java", color: "text-red-500" },
    TechBadge { name: "JavaScript", color: "text-yellow-500" },
    TechBadge { name: "Node.js", color: "text-green-600" },
    TechBadge { name: "Machine Learning", color: "text-red-500" },
    TechBadge { name: "Power BI", color: "text-blue-500" },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
    pub color: &'static str,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        icon: "fa-solid fa-code",
        skills: &["C", "C++", "Java", "Python", "JavaScript"],
        color: "from-blue-700 to-blue-800",
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        icon: "fa-solid fa-code",
        skills: &["React.js", "React Native", "Node.js", "Express.js", "Tailwind CSS", "Bootstrap"],
        color: "from-green-700 to-green-800",
    },
    SkillCategory {
        title: "Databases",
        icon: "fa-solid fa-database",
        skills: &["SQL", "MongoDB", "Firebase", "PostgreSQL"],
        color: "from-purple-700 to-purple-800",
    },
    SkillCategory {
        title: "Cloud & DevOps",
        icon: "fa-solid fa-cloud",
        skills: &["AWS", "GCP", "Docker", "Kubernetes", "Jenkins", "Git"],
        color: "from-orange-700 to-orange-800",
    },
    SkillCategory {
        title: "AI/ML & Extended Tech",
        icon: "fa-solid fa-brain",
        skills: &["Scikit-learn", "TensorFlow", "Generative AI", "NLP", "Unity 3D", "ARCore"],
        color: "from-pink-700 to-pink-800",
    },
    SkillCategory {
        title: "UI/UX & Design",
        icon: "fa-solid fa-palette",
        skills: &["Figma", "Adobe XD", "Canva", "Prototyping", "Wireframing"],
        color: "from-yellow-700 to-yellow-800",
    },
    SkillCategory {
        title: "API & Testing",
        icon: "fa-solid fa-code",
        skills: &["REST API", "GraphQL", "Postman"],
        color: "from-indigo-700 to-indigo-800",
    },
];

pub struct SoftSkill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const SOFT_SKILLS: &[SoftSkill] = &[
    SoftSkill { name: "Leadership & Teamwork", icon: "fa-solid fa-users" },
    SoftSkill { name: "Problem-Solving", icon: "fa-solid fa-lightbulb" },
    SoftSkill { name: "Critical Thinking", icon: "fa-solid fa-brain" },
    SoftSkill { name: "Communication", icon: "fa-solid fa-users" },
    SoftSkill { name: "Creativity & Innovation", icon: "fa-solid fa-lightbulb" },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub icon: &'static str,
    pub color: &'static str,
    pub impact: &'static str,
    pub kind: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Direct Market Access App",
        description: "A React Native mobile app connecting farmers directly to consumers, eliminating middlemen and boosting farmer income. Integrated with Firebase for real-time data management.",
        tech: &["React Native", "Firebase", "JavaScript", "Mobile Dev"],
        icon: "fa-solid fa-mobile-screen",
        color: "from-green-800 to-green-900",
        impact: "Boosted farmer income by 30%",
        kind: "Mobile App",
    },
    Project {
        title: "VR Guest House Booking",
        description: "Immersive VR booking system built with Unity 3D and Firebase. Users can take 360° virtual tours of guest houses before booking.",
        tech: &["Unity 3D", "Firebase", "C#", "VR/AR"],
        icon: "fa-solid fa-globe",
        color: "from-purple-800 to-purple-900",
        impact: "Increased bookings by 45%",
        kind: "VR Application",
    },
    Project {
        title: "Generative AI Chatbot",
        description: "Fine-tuned LLM chatbot for college Q&A system. Provides instant, accurate responses to student queries about courses, admissions, and campus life.",
        tech: &["Python", "TensorFlow", "NLP", "Generative AI"],
        icon: "fa-solid fa-robot",
        color: "from-blue-800 to-blue-900",
        impact: "Reduced query response time by 80%",
        kind: "AI System",
    },
    Project {
        title: "Food Ordering Web App",
        description: "Full-stack web application for online food ordering with real-time order tracking, payment integration, and restaurant management dashboard.",
        tech: &["React.js", "Node.js", "MongoDB", "Express.js"],
        icon: "fa-solid fa-cart-shopping",
        color: "from-orange-800 to-orange-900",
        impact: "Served 1000+ orders",
        kind: "Web Application",
    },
    Project {
        title: "Weather Dashboard",
        description: "Real-time weather monitoring dashboard with interactive maps, forecasts, and weather alerts. Built with modern web technologies.",
        tech: &["React.js", "API Integration", "Chart.js", "CSS3"],
        icon: "fa-solid fa-cloud",
        color: "from-cyan-800 to-cyan-900",
        impact: "Real-time weather data",
        kind: "Dashboard",
    },
];

pub const ADDITIONAL_PROJECTS: &[&str] = &[
    "Predictive Analytics & Forecasting",
    "Real-time Data Visualization",
    "Expense Trackers & Budgeting Tools",
];

pub struct AchievementGroup {
    pub category: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub items: &'static [&'static str],
}

pub const ACHIEVEMENTS_LEFT: &[AchievementGroup] = &[
    AchievementGroup {
        category: "Hackathons & Events",
        icon: "fa-solid fa-trophy",
        color: "from-yellow-700 to-yellow-800",
        items: &[
            "MINSKY'24 - AI/ML Innovation Challenge",
            "PSG Tech Fest - Technical Excellence",
            "SRiSHTi 2K23 - Creative Solutions",
            "RETRO CODE - Programming Competition",
            "AUTONIX'24 - Autonomous Systems",
            "IDEATHON - Innovation Challenge",
            "SIH Internal - Smart India Hackathon",
            "Technotron'24 - Technology Symposium",
        ],
    },
    AchievementGroup {
        category: "Internships",
        icon: "fa-solid fa-briefcase",
        color: "from-green-700 to-green-800",
        items: &[
            "DotWorld Technologies - Software Testing",
            "Nutz Technovation - Web Development",
        ],
    },
];

pub const ACHIEVEMENTS_RIGHT: &[AchievementGroup] = &[
    AchievementGroup {
        category: "Certifications",
        icon: "fa-solid fa-award",
        color: "from-blue-700 to-blue-800",
        items: &[
            "MongoDB Certified Developer",
            "GUVI-HCL Terraform Certification",
            "CodeChef DBMS Certification",
            "AWS Cloud Practitioner (In Progress)",
            "React Native Development",
        ],
    },
    AchievementGroup {
        category: "Event Coordination",
        icon: "fa-solid fa-book-open",
        color: "from-purple-700 to-purple-800",
        items: &[
            "Science Expo 2024 - Lead Coordinator",
            "Ideathon 2K24 - Event Management",
            "Proof of Concept 2K24 - Technical Lead",
            "College Tech Symposium - Organizer",
        ],
    },
];

pub const TIMELINE_YEARS: &[&str] = &["2022", "2023", "2024", "2025"];

pub struct Club {
    pub name: &'static str,
    pub role: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub contributions: &'static [&'static str],
}

pub const CLUBS: &[Club] = &[
    Club {
        name: "Innovation and Entrepreneurship Forum (IEF)",
        role: "Active Member",
        icon: "fa-solid fa-star",
        description: "Leading innovation initiatives and entrepreneurship programs",
        color: "from-yellow-500 to-orange-500",
        contributions: &[
            "Organized startup pitch competitions",
            "Mentored junior students in innovation projects",
            "Coordinated tech workshops and seminars",
        ],
    },
    Club {
        name: "Rotaract Club",
        role: "Engaged Member",
        icon: "fa-solid fa-heart",
        description: "Community service and social impact initiatives",
        color: "from-red-500 to-pink-500",
        contributions: &[
            "Participated in community outreach programs",
            "Organized blood donation drives",
            "Led environmental awareness campaigns",
        ],
    },
    Club {
        name: "Red Beard Club (RBC)",
        role: "Member",
        icon: "fa-solid fa-users",
        description: "Technical community and peer collaboration",
        color: "from-blue-500 to-indigo-500",
        contributions: &[
            "Collaborative coding projects",
            "Technical skill sharing sessions",
            "Peer mentoring programs",
        ],
    },
    Club {
        name: "Cloud Users Group",
        role: "Member",
        icon: "fa-solid fa-globe",
        description: "Cloud computing and modern infrastructure",
        color: "from-cyan-500 to-blue-500",
        contributions: &[
            "AWS and GCP workshops",
            "Cloud architecture discussions",
            "DevOps best practices sharing",
        ],
    },
    Club {
        name: "Mobile App Development Club",
        role: "Member",
        icon: "fa-solid fa-code",
        description: "Mobile development and emerging technologies",
        color: "from-green-500 to-teal-500",
        contributions: &[
            "React Native development projects",
            "Mobile UI/UX design workshops",
            "Cross-platform development tutorials",
        ],
    },
    Club {
        name: "English Proficiency Club",
        role: "Member",
        icon: "fa-solid fa-book-open",
        description: "Communication skills and professional development",
        color: "from-purple-500 to-indigo-500",
        contributions: &[
            "Public speaking workshops",
            "Technical presentation skills",
            "Professional communication training",
        ],
    },
];

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const LEADERSHIP_STATS: &[Stat] = &[
    Stat { label: "Clubs & Organizations", value: "10+" },
    Stat { label: "Events Organized", value: "30+" },
    Stat { label: "Students Mentored", value: "25+" },
    Stat { label: "Leadership Roles", value: "10+" },
];

pub const LEADERSHIP_PHILOSOPHY: &str = "\"True leadership is not about being in charge, but about taking care of those in your charge. Through my involvement in various clubs and organizations, I believe in fostering collaboration, innovation, and positive impact in both technical and social spheres.\"";

pub struct ContactInfo {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "fa-solid fa-envelope",
        label: "Email",
        value: EMAIL,
        href: "mailto:varshine12@gmail.com",
    },
    ContactInfo {
        icon: "fa-solid fa-phone",
        label: "Phone",
        value: "+91 88256 79728",
        href: "tel:+918825679728",
    },
    ContactInfo {
        icon: "fa-solid fa-location-dot",
        label: "Location",
        value: "Erode, Tamil Nadu, India",
        href: "#",
    },
];

pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub hover: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: "devicon-github-plain",
        label: "GitHub",
        href: "https://github.com/VarshineT",
        hover: "hover:text-[#2ea44f]",
    },
    SocialLink {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/varshine12/",
        hover: "hover:text-blue-600",
    },
    SocialLink {
        icon: "fa-solid fa-code",
        label: "LeetCode",
        href: "https://leetcode.com/u/VARSHINE_T/",
        hover: "hover:text-orange-500",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_unique<'a>(keys: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate key: {key}");
        }
    }

    #[test]
    fn test_list_keys_are_unique() {
        assert_unique(TECH_BADGES.iter().map(|t| t.name));
        assert_unique(SKILL_CATEGORIES.iter().map(|c| c.title));
        assert_unique(PROJECTS.iter().map(|p| p.title));
        assert_unique(CLUBS.iter().map(|c| c.name));
        assert_unique(
            ACHIEVEMENTS_LEFT
                .iter()
                .chain(ACHIEVEMENTS_RIGHT)
                .map(|g| g.category),
        );
        for category in SKILL_CATEGORIES {
            assert_unique(category.skills.iter().copied());
        }
    }

    #[test]
    fn test_email_link_matches_address() {
        let email = CONTACT_INFO
            .iter()
            .find(|c| c.label == "Email")
            .expect("email entry");
        assert_eq!(email.href, format!("mailto:{EMAIL}"));
    }

    #[test]
    fn test_linked_assets_are_served() {
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for path in [RESUME_PATH, FAVICON_PATH] {
            let file = assets.join(path.trim_start_matches('/'));
            assert!(file.is_file(), "missing asset {}", file.display());
        }
    }
}
