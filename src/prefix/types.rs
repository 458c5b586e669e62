use std::convert::Infallible;
use std::str::FromStr;

/// The sender of a message: `name[!user][@host]`.
///
/// `name` is a nickname or a server name. An empty `user` or `host` means
/// that segment is absent. Parsing never fails; input containing extra `!`
/// or `@` simply splits at the first occurrence of each.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prefix {
    /// Nickname or server name.
    pub name: String,
    pub user: String,
    pub host: String,
}

impl Prefix {
    pub fn new(
        name: impl Into<String>,
        user: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Prefix {
            name: name.into(),
            user: user.into(),
            host: host.into(),
        }
    }

    /// Parse a prefix without its leading `:`.
    ///
    /// ```
    /// use tightbeam::Prefix;
    ///
    /// let p = Prefix::parse("nick!user@host");
    /// assert_eq!(p, Prefix::new("nick", "user", "host"));
    ///
    /// let p = Prefix::parse("irc.example.com");
    /// assert_eq!(p.name, "irc.example.com");
    /// assert!(p.user.is_empty() && p.host.is_empty());
    /// ```
    pub fn parse(s: &str) -> Self {
        let (left, host) = s.split_once('@').unwrap_or((s, ""));
        let (name, user) = left.split_once('!').unwrap_or((left, ""));
        Prefix::new(name, user, host)
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.user.is_empty() && self.host.is_empty()
    }
}

impl FromStr for Prefix {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Prefix::parse(s))
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Prefix::parse(s)
    }
}
