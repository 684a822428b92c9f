use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Male, Self::Female, Self::Other]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

/// Build an avatar URL for the external avatar service.
#[must_use]
pub fn generate_avatar(name: &str, gender: Gender) -> String {
    let path = match gender {
        Gender::Female => "girl",
        Gender::Male | Gender::Other => "boy",
    };
    // Minimal percent-encoding; names only need spaces handled.
    let encoded = name.replace(' ', "%20");
    format!("https://avatar.iran.liara.run/public/{path}?username={encoded}")
}

/// Editable personal-details record shown on the profile screen.
///
/// Seeded from the session identity at login and mutated independently
/// afterwards; it may diverge from the identity and that divergence is
/// accepted behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub gender: Gender,
    pub avatar: String,
}

impl Profile {
    /// Seed a profile from the minimal identity fields.
    #[must_use]
    pub fn seeded(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            avatar: generate_avatar(name, Gender::default()),
            ..Self::default()
        }
    }

    /// Shallow-merge a patch into the profile. No field-format
    /// validation is applied.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
    }
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub gender: Option<Gender>,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Gender, Profile, ProfilePatch, generate_avatar};

    #[test]
    fn avatar_url_encodes_name_and_gender_path() {
        let url = generate_avatar("Asha Verma", Gender::Female);
        assert!(url.contains("/girl?"));
        assert!(url.ends_with("username=Asha%20Verma"));
        assert!(generate_avatar("X", Gender::Other).contains("/boy?"));
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut profile = Profile::seeded("Asha", "asha@x.com");
        profile.apply(ProfilePatch {
            phone: Some("+91 98765 43210".into()),
            ..ProfilePatch::default()
        });
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.email, "asha@x.com");
        assert_eq!(profile.phone, "+91 98765 43210");
    }

    #[test]
    fn profile_email_may_diverge_from_seed() {
        let mut profile = Profile::seeded("Asha", "asha@x.com");
        profile.apply(ProfilePatch {
            email: Some("new@x.com".into()),
            ..ProfilePatch::default()
        });
        assert_eq!(profile.email, "new@x.com");
    }
}
