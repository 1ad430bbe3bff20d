//! Tier search patterns compiled from the tier definition.

use crate::config::InfraTypes;
use crate::error::{Error, Result};
use crate::tier::Tier;
use regex_lite::Regex;
use tracing::info;

/// One compiled path pattern per tier.
///
/// The base pattern is the fixed literal `/base/`; minor and major are
/// `/overlay/(<id>|...)/` alternations over their identifier lists.
/// Identifiers are embedded verbatim without escaping: an identifier carrying
/// regex metacharacters either fails compilation (reported as
/// [`Error::Pattern`]) or silently alters matching, so configs are expected
/// to keep identifiers metacharacter-free.
#[derive(Debug)]
pub struct TierPatterns {
    base: Regex,
    minor: Regex,
    major: Regex,
}

impl TierPatterns {
    /// Compile the three tier patterns.
    pub fn build(infra: &InfraTypes) -> Result<Self> {
        let minor = overlay_pattern(&infra.minor_infra);
        let major = overlay_pattern(&infra.major_infra);
        info!(%minor, %major, "defining tier patterns");
        Ok(Self {
            base: compile(Tier::Base, "/base/")?,
            minor: compile(Tier::Minor, &minor)?,
            major: compile(Tier::Major, &major)?,
        })
    }

    /// The compiled pattern for a tier.
    pub fn get(&self, tier: Tier) -> &Regex {
        match tier {
            Tier::Base => &self.base,
            Tier::Minor => &self.minor,
            Tier::Major => &self.major,
        }
    }

    /// First tier whose pattern matches the path, in fixed evaluation order
    /// (base, minor, major). First match wins, so overlapping patterns never
    /// attribute a path twice.
    pub fn match_tier(&self, path: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|t| self.get(*t).is_match(path))
    }
}

/// `/overlay/(a|b|c)/` alternation over the identifier list.
fn overlay_pattern(ids: &[String]) -> String {
    format!("/overlay/({})/", ids.join("|"))
}

fn compile(tier: Tier, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::Pattern {
        tier: tier.key(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infra(minor: &[&str], major: &[&str]) -> InfraTypes {
        InfraTypes {
            minor_infra: minor.iter().map(|s| s.to_string()).collect(),
            major_infra: major.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn base_matches_literal_segment() {
        let patterns = TierPatterns::build(&infra(&["dev"], &["prod"])).unwrap();
        assert_eq!(
            patterns.match_tier("infra/base/network/main.tf"),
            Some(Tier::Base)
        );
        assert_eq!(patterns.match_tier("infra/baseline/main.tf"), None);
    }

    #[test]
    fn overlay_alternation_matches_each_id() {
        let patterns = TierPatterns::build(&infra(&["dev", "staging"], &["prod"])).unwrap();
        assert_eq!(
            patterns.match_tier("infra/overlay/dev/app/main.tf"),
            Some(Tier::Minor)
        );
        assert_eq!(
            patterns.match_tier("infra/overlay/staging/app/main.tf"),
            Some(Tier::Minor)
        );
        assert_eq!(
            patterns.match_tier("infra/overlay/prod/app/main.tf"),
            Some(Tier::Major)
        );
    }

    #[test]
    fn unknown_overlay_matches_nothing() {
        let patterns = TierPatterns::build(&infra(&["dev"], &["prod"])).unwrap();
        assert_eq!(patterns.match_tier("infra/overlay/qa/app/main.tf"), None);
    }

    #[test]
    fn overlay_id_must_be_a_full_segment() {
        let patterns = TierPatterns::build(&infra(&["dev"], &["prod"])).unwrap();
        // No trailing slash after the overlay id: not a match.
        assert_eq!(patterns.match_tier("infra/overlay/dev"), None);
    }

    #[test]
    fn first_match_wins_across_tiers() {
        // "shared" routed to both lists: minor is evaluated first.
        let patterns = TierPatterns::build(&infra(&["shared"], &["shared"])).unwrap();
        assert_eq!(
            patterns.match_tier("infra/overlay/shared/x/main.tf"),
            Some(Tier::Minor)
        );

        // A path under /base/ that also names a known overlay goes to base.
        let patterns = TierPatterns::build(&infra(&["dev"], &["prod"])).unwrap();
        assert_eq!(
            patterns.match_tier("infra/base/overlay/dev/main.tf"),
            Some(Tier::Base)
        );
    }

    #[test]
    fn empty_id_list_matches_no_real_path() {
        let patterns = TierPatterns::build(&infra(&[], &["prod"])).unwrap();
        assert_eq!(patterns.match_tier("infra/overlay/dev/app/main.tf"), None);
        assert_eq!(
            patterns.match_tier("infra/overlay/prod/app/main.tf"),
            Some(Tier::Major)
        );
    }
}
