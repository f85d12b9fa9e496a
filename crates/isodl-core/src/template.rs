//! Placeholder expansion for URL and filename templates.
//!
//! Recognized tokens are `{base_url}`, `{version}` and `{distro}`. Expansion
//! is a single left-to-right pass: substituted values are never rescanned, so
//! a value containing `{version}` is inserted literally.

/// A placeholder recognized in catalog templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    BaseUrl,
    Version,
    Distro,
}

impl Placeholder {
    /// Every recognized placeholder.
    pub const ALL: [Self; 3] = [Self::BaseUrl, Self::Version, Self::Distro];

    /// The literal token as written in a template.
    pub const fn token(self) -> &'static str {
        match self {
            Self::BaseUrl => "{base_url}",
            Self::Version => "{version}",
            Self::Distro => "{distro}",
        }
    }
}

/// Values to substitute. Placeholders left unset stay verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Substitutions<'a> {
    base_url: Option<&'a str>,
    version: Option<&'a str>,
    distro: Option<&'a str>,
}

impl<'a> Substitutions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_base_url(mut self, value: &'a str) -> Self {
        self.base_url = Some(value);
        self
    }

    #[must_use]
    pub const fn with_version(mut self, value: &'a str) -> Self {
        self.version = Some(value);
        self
    }

    #[must_use]
    pub const fn with_distro(mut self, value: &'a str) -> Self {
        self.distro = Some(value);
        self
    }

    /// The value bound to a placeholder, if any.
    pub const fn get(&self, placeholder: Placeholder) -> Option<&'a str> {
        match placeholder {
            Placeholder::BaseUrl => self.base_url,
            Placeholder::Version => self.version,
            Placeholder::Distro => self.distro,
        }
    }
}

/// Expand all bound placeholders in `template`.
pub fn expand(template: &str, substitutions: &Substitutions<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        let hit = Placeholder::ALL.iter().find_map(|&p| {
            if candidate.starts_with(p.token()) {
                substitutions.get(p).map(|value| (p.token().len(), value))
            } else {
                None
            }
        });

        match hit {
            Some((token_len, value)) => {
                out.push_str(value);
                rest = &candidate[token_len..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
