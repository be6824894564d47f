use anyhow::Context;
use valq::query_value;

use super::fetch::parse_datetime;
use super::types::{Sponsor, Sponsorship, Tier};

/// Decodes one connection node into a [`Sponsorship`].
///
/// Returns `Ok(None)` when the sponsor entity carries no login; any other
/// structurally unexpected shape is an error.
pub(super) fn sponsorship_from_node(
    node: &serde_json::Value,
) -> anyhow::Result<Option<Sponsorship>> {
    let Some(login) = query_value!(node.sponsorEntity.login -> str) else {
        return Ok(None);
    };

    let id = query_value!(node.id -> str).context("sponsorship node missing id")?;
    let created_at = parse_datetime(
        query_value!(node."createdAt" -> str).context("sponsorship node missing createdAt")?,
    )?;
    let public = query_value!(node."privacyLevel" -> str) == Some("PUBLIC");

    let email = query_value!(node.sponsorEntity."organizationEmail" -> str)
        .or_else(|| query_value!(node.sponsorEntity.email -> str))
        .map(str::to_string);

    let tier = query_value!(node.tier).context("sponsorship node missing tier")?;
    let tier = Tier {
        id: query_value!(tier.id -> str)
            .context("tier missing id")?
            .to_string(),
        created_at: parse_datetime(
            query_value!(tier."createdAt" -> str).context("tier missing createdAt")?,
        )?,
        name: query_value!(tier.name -> str)
            .context("tier missing name")?
            .to_string(),
        description: query_value!(tier.description -> str)
            .context("tier missing description")?
            .to_string(),
        monthly_price_in_cents: tier
            .get("monthlyPriceInCents")
            .and_then(|value| value.as_i64())
            .context("tier missing monthlyPriceInCents")?,
    };

    Ok(Some(Sponsorship {
        id: id.to_string(),
        created_at,
        public,
        sponsor: Sponsor {
            login: login.to_string(),
            email,
        },
        tier,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn node(sponsor_entity: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": "S_1",
            "createdAt": "2025-03-01T12:00:00Z",
            "privacyLevel": "PUBLIC",
            "tier": {
                "id": "T_1",
                "createdAt": "2024-06-01T00:00:00Z",
                "name": "Gold",
                "description": "Gold tier",
                "monthlyPriceInCents": 500,
            },
            "sponsorEntity": sponsor_entity,
        })
    }

    #[test]
    fn decodes_user_sponsor() {
        let node = node(serde_json::json!({
            "__typename": "User",
            "login": "alice",
            "email": "alice@example.test",
        }));

        let sponsorship = sponsorship_from_node(&node).unwrap().unwrap();

        assert_eq!(sponsorship.id, "S_1");
        assert_eq!(
            sponsorship.created_at,
            chrono::Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
        );
        assert!(sponsorship.public);
        assert_eq!(sponsorship.sponsor.login, "alice");
        assert_eq!(sponsorship.sponsor.email.as_deref(), Some("alice@example.test"));
        assert_eq!(sponsorship.tier.id, "T_1");
        assert_eq!(sponsorship.tier.name, "Gold");
        assert_eq!(sponsorship.tier.description, "Gold tier");
        assert_eq!(sponsorship.tier.monthly_price_in_cents, 500);
    }

    #[test]
    fn non_public_privacy_decodes_to_private() {
        let mut node = node(serde_json::json!({ "__typename": "User", "login": "alice" }));
        node["privacyLevel"] = serde_json::json!("PRIVATE");

        let sponsorship = sponsorship_from_node(&node).unwrap().unwrap();

        assert!(!sponsorship.public);
    }

    #[test]
    fn organization_email_wins_over_user_email() {
        let node = node(serde_json::json!({
            "__typename": "Organization",
            "login": "acme",
            "email": "person@example.test",
            "organizationEmail": "billing@example.test",
        }));

        let sponsorship = sponsorship_from_node(&node).unwrap().unwrap();

        assert_eq!(
            sponsorship.sponsor.email.as_deref(),
            Some("billing@example.test")
        );
    }

    #[test]
    fn missing_email_decodes_to_none() {
        let node = node(serde_json::json!({ "__typename": "User", "login": "alice" }));

        let sponsorship = sponsorship_from_node(&node).unwrap().unwrap();

        assert_eq!(sponsorship.sponsor.email, None);
    }

    #[test]
    fn sponsor_without_login_is_dropped() {
        let node = node(serde_json::json!({ "__typename": "User" }));

        assert!(sponsorship_from_node(&node).unwrap().is_none());
    }

    #[test]
    fn missing_tier_is_an_error() {
        let mut node = node(serde_json::json!({ "__typename": "User", "login": "alice" }));
        node.as_object_mut().unwrap().remove("tier");

        assert!(sponsorship_from_node(&node).is_err());
    }

    #[test]
    fn invalid_timestamp_is_an_error() {
        let mut node = node(serde_json::json!({ "__typename": "User", "login": "alice" }));
        node["createdAt"] = serde_json::json!("yesterday");

        assert!(sponsorship_from_node(&node).is_err());
    }
}
