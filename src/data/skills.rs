use serde::Serialize;

use super::{require, require_all, DataError};

/// A flat, named list of skills as shown on the about page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

impl SkillCategory {
    pub(crate) fn validate(&self) -> Result<(), DataError> {
        require(self.key, "title", self.title)?;
        require_all(self.key, "items", self.items)
    }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        key: "core",
        title: "Core",
        items: &[
            "TypeScript",
            "Next.js (App Router)",
            "Node.js",
            "REST APIs",
            "PostgreSQL",
            "MongoDB",
            "Prisma ORM",
            "Git & GitHub",
            "React",
        ],
    },
    SkillCategory {
        key: "frontend",
        title: "Frontend",
        items: &[
            "React",
            "Next.js (App Router)",
            "TypeScript",
            "JavaScript (ES6+)",
            "Tailwind CSS",
            "Framer Motion",
            "React Query / TanStack Query",
            "Zustand",
            "HTML5 & CSS3",
            "Responsive UI & accessibility",
        ],
    },
    SkillCategory {
        key: "backend",
        title: "Backend",
        items: &[
            "Node.js",
            "Express.js",
            "NestJS (basics)",
            "RESTful APIs",
            "GraphQL (basics)",
            "Webhooks",
            "Authentication (JWT, OAuth)",
            "Role-based access control",
        ],
    },
    SkillCategory {
        key: "databases",
        title: "Databases & Infrastructure",
        items: &[
            "PostgreSQL",
            "MongoDB",
            "Prisma ORM",
            "Supabase",
            "Redis (caching / sessions)",
        ],
    },
    SkillCategory {
        key: "tools",
        title: "Tools & Others",
        items: &[
            "Git & GitHub",
            "Docker (basics)",
            "Vercel deployment",
            "CI/CD pipelines",
            "Stripe API (payments & webhooks)",
            "VS Code",
            "Postman / API testing",
            "Linux & CLI workflows",
        ],
    },
    SkillCategory {
        key: "soft",
        title: "Soft Skills",
        items: &[
            "Clean code & best practices",
            "Problem solving & debugging",
            "Writing technical documentation",
            "Communicating with non-technical people",
            "Working independently & remote collaboration",
            "Time management & task prioritization",
        ],
    },
];

/// Categories rendered as cards on the about page.
pub const ABOUT_CATEGORIES: [&str; 4] = ["frontend", "backend", "databases", "tools"];

pub fn category(key: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.key == key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkillDomain {
    Frontend,
    Backend,
    Tools,
}

impl SkillDomain {
    pub const ALL: [SkillDomain; 3] = [Self::Frontend, Self::Backend, Self::Tools];

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools & DevOps",
        }
    }

    /// Tailwind gradient stops for the domain's accent.
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Frontend => "from-cyan-400 to-blue-500",
            Self::Backend => "from-purple-400 to-pink-500",
            Self::Tools => "from-blue-400 to-cyan-500",
        }
    }

    pub fn glow(self) -> &'static str {
        match self {
            Self::Frontend => "rgba(6, 249, 241, 0.6)",
            Self::Backend => "rgba(168, 85, 247, 0.6)",
            Self::Tools => "rgba(59, 130, 246, 0.6)",
        }
    }
}

/// A skill with a self-assessed proficiency, used by the skills showcase.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub domain: SkillDomain,
    pub icon: &'static str,
}

impl Skill {
    pub(crate) fn validate(&self) -> Result<(), DataError> {
        require("skill", "name", self.name)?;
        require(self.name, "icon", self.icon)?;
        if self.level > 100 {
            return Err(DataError::LevelOutOfRange {
                name: self.name.to_string(),
                level: self.level,
            });
        }
        Ok(())
    }
}

const fn skill(name: &'static str, level: u8, domain: SkillDomain, icon: &'static str) -> Skill {
    Skill {
        name,
        level,
        domain,
        icon,
    }
}

pub const SHOWCASE_SKILLS: &[Skill] = &[
    skill("React", 95, SkillDomain::Frontend, "devicon-react-original"),
    skill("Next.js", 93, SkillDomain::Frontend, "devicon-nextjs-plain"),
    skill("TypeScript", 92, SkillDomain::Frontend, "devicon-typescript-plain"),
    skill("Tailwind CSS", 94, SkillDomain::Frontend, "devicon-tailwindcss-original"),
    skill("Framer Motion", 90, SkillDomain::Frontend, "devicon-framermotion-original"),
    skill("HTML/CSS", 96, SkillDomain::Frontend, "devicon-html5-plain"),
    skill("Node.js", 91, SkillDomain::Backend, "devicon-nodejs-plain"),
    skill("Express.js", 89, SkillDomain::Backend, "devicon-express-original"),
    skill("PostgreSQL", 88, SkillDomain::Backend, "devicon-postgresql-plain"),
    skill("MongoDB", 87, SkillDomain::Backend, "devicon-mongodb-plain"),
    skill("REST APIs", 92, SkillDomain::Backend, "devicon-fastapi-plain"),
    skill("Prisma ORM", 85, SkillDomain::Backend, "devicon-prisma-original"),
    skill("Git/GitHub", 94, SkillDomain::Tools, "devicon-github-plain"),
    skill("Docker", 82, SkillDomain::Tools, "devicon-docker-plain"),
    skill("AWS", 80, SkillDomain::Tools, "devicon-amazonwebservices-plain-wordmark"),
    skill("Vercel", 93, SkillDomain::Tools, "devicon-vercel-original"),
    skill("CI/CD", 86, SkillDomain::Tools, "devicon-githubactions-plain"),
    skill("WebSockets", 84, SkillDomain::Tools, "devicon-socketio-original"),
];

pub fn showcase(domain: SkillDomain) -> Vec<&'static Skill> {
    SHOWCASE_SKILLS
        .iter()
        .filter(|s| s.domain == domain)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        let frontend = category("frontend").expect("frontend category exists");
        assert_eq!(frontend.title, "Frontend");
        assert!(frontend.items.contains(&"Tailwind CSS"));
        assert!(category("cooking").is_none());
    }

    #[test]
    fn test_about_categories_exist() {
        for key in ABOUT_CATEGORIES {
            assert!(category(key).is_some(), "missing category {key}");
        }
    }

    #[test]
    fn test_showcase_partitions_all_skills() {
        let total = SkillDomain::ALL
            .iter()
            .map(|d| showcase(*d).len())
            .sum::<usize>();
        assert_eq!(total, SHOWCASE_SKILLS.len());
        assert!(showcase(SkillDomain::Backend)
            .iter()
            .all(|s| s.domain == SkillDomain::Backend));
    }

    #[test]
    fn test_level_out_of_range() {
        let bad = skill("Overconfidence", 120, SkillDomain::Tools, "devicon-bash-plain");
        assert_eq!(
            bad.validate(),
            Err(DataError::LevelOutOfRange {
                name: "Overconfidence".to_string(),
                level: 120
            })
        );
    }
}
