use serde::Serialize;

use super::{require, require_all, DataError};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub username: &'static str,
    /// devicon class used for the link's glyph
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Social {
    pub github: SocialLink,
    pub linkedin: SocialLink,
    pub facebook: SocialLink,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub years_of_experience: u8,
    pub bio: &'static [&'static str],
    pub currently_working_on: &'static str,
    pub email: &'static str,
    pub resume_url: &'static str,
    pub social: Social,
}

pub const PROFILE: Profile = Profile {
    name: "Asadujjaman Atik",
    initials: "AA",
    role: "Full-stack Developer",
    tagline: "Full-stack developer building fast, accessible web applications with TypeScript, Node.js and modern databases.",
    location: "Dhaka, Bangladesh",
    years_of_experience: 2,
    bio: &[
        "I'm a full-stack developer who enjoys turning rough product ideas into shipped, maintainable software. Most of my work lives at the seam between a polished interface and a dependable API.",
        "On the frontend I reach for React and Next.js with Tailwind CSS; on the backend I build REST services with Node.js and Express on top of PostgreSQL or MongoDB, usually through Prisma.",
        "I care about clean code, clear documentation and communicating well with people who don't write code. When I'm not building, I'm reading source code of tools I use every day.",
    ],
    currently_working_on: "A multi-vendor commerce platform with real-time order tracking",
    email: "hello@asadatik.dev",
    resume_url: "/resume.pdf",
    social: Social {
        github: SocialLink {
            name: "GitHub",
            href: "https://github.com/asadatik",
            username: "asadatik",
            icon: "devicon-github-plain",
        },
        linkedin: SocialLink {
            name: "LinkedIn",
            href: "https://linkedin.com/in/asadujjaman-atik",
            username: "in/asadujjaman-atik",
            icon: "devicon-linkedin-plain",
        },
        facebook: SocialLink {
            name: "Facebook",
            href: "https://facebook.com/codewithatik",
            username: "codewithatik",
            icon: "devicon-facebook-plain",
        },
    },
};

impl Profile {
    /// Links shown on the contact page, in display order.
    pub fn social_links(&self) -> [SocialLink; 3] {
        [self.social.github, self.social.linkedin, self.social.facebook]
    }

    /// The footer only carries the code-hosting and professional networks.
    pub fn footer_links(&self) -> [SocialLink; 2] {
        [self.social.github, self.social.linkedin]
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub(crate) fn validate(&self) -> Result<(), DataError> {
        let record = "profile";
        require(record, "name", self.name)?;
        require(record, "initials", self.initials)?;
        require(record, "role", self.role)?;
        require(record, "tagline", self.tagline)?;
        require(record, "location", self.location)?;
        require_all(record, "bio", self.bio)?;
        require(record, "currently_working_on", self.currently_working_on)?;
        require(record, "email", self.email)?;
        require(record, "resume_url", self.resume_url)?;
        for link in self.social_links() {
            require(link.name, "href", link.href)?;
            require(link.name, "username", link.username)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_links_order() {
        let names = PROFILE
            .social_links()
            .iter()
            .map(|l| l.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["GitHub", "LinkedIn", "Facebook"]);
        assert_eq!(PROFILE.footer_links().len(), 2);
    }

    #[test]
    fn test_mailto() {
        assert_eq!(PROFILE.mailto(), format!("mailto:{}", PROFILE.email));
    }
}
