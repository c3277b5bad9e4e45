use rand::Rng;
use serde_json::{json, Value};
use std::fmt;

use super::content::{SeedProfile, DEV_PROFILE, JOINS, SEED_PROFILES};
use super::{short_id, Backend, Seeder};
use crate::ui::{Phase, Ui};

/// Number of postings the seeded hosts publish
const HOSTS_NEEDED: usize = 5;
const STARTING_MARKERS: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSummary {
    pub dev_updated: bool,
    pub accounts: usize,
    pub profiles_updated: usize,
    pub profiles_inserted: usize,
    pub postings: usize,
    pub wallets: usize,
    /// Ids of the seeded accounts, in content order
    pub user_ids: Vec<String>,
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Profile seeding summary:")?;
        writeln!(f, "  dev profile updated: {}", self.dev_updated)?;
        writeln!(f, "  accounts: {}/{}", self.accounts, SEED_PROFILES.len())?;
        writeln!(
            f,
            "  profiles: {} updated, {} inserted",
            self.profiles_updated, self.profiles_inserted
        )?;
        writeln!(f, "  postings: {}/{}", self.postings, JOINS.len())?;
        write!(f, "  wallets created: {}", self.wallets)
    }
}

/// Attributes shared by the dev update and seeded profiles
fn profile_attributes(profile: &SeedProfile) -> Value {
    json!({
        "gender": profile.gender,
        "birth_year": profile.birth_year,
        "regions": profile.regions,
        "handicap": profile.handicap,
        "styles": profile.styles,
        "times": profile.times,
        "intro": profile.intro,
        "is_verified": profile.is_verified,
    })
}

fn profile_path(id: &str) -> String {
    format!("/rest/v1/profiles?id=eq.{}", id)
}

/// Accounts, profile attributes, group postings and wallets
pub fn seed_profiles<B: Backend, U: Ui>(seeder: &mut Seeder<'_, B, U>) -> ProfileSummary {
    let mut summary = ProfileSummary::default();

    seeder.ui.set_phase(Phase::Connecting);
    let dev_email = seeder.dev_email().to_string();
    let dev_id = seeder.find_user_id(&dev_email);
    match &dev_id {
        Some(id) => {
            summary.dev_updated = seeder
                .patch(&profile_path(id), profile_attributes(&DEV_PROFILE))
                .is_some();
            seeder.ui.log(format!(
                "dev profile {}: {}",
                short_id(id),
                if summary.dev_updated { "updated" } else { "failed" }
            ));
        }
        None => {
            tracing::warn!(email = %dev_email, "dev account not found, skipping its profile");
        }
    }

    seeder.ui.set_phase(Phase::Accounts);
    let total = SEED_PROFILES.len() as u64;
    for (i, profile) in SEED_PROFILES.iter().enumerate() {
        seeder
            .ui
            .set_progress(i as u64 + 1, total, format!("{} ({})", profile.name, profile.email));

        let Some(user_id) = seeder.ensure_user(profile.email) else {
            seeder.ui.log(format!("{}: account unavailable, skipped", profile.email));
            continue;
        };
        summary.accounts += 1;

        let mut fields = profile_attributes(profile);
        let is_online: bool = seeder.rng.gen();
        if let Some(obj) = fields.as_object_mut() {
            obj.insert("name".into(), json!(profile.name));
            obj.insert("photos".into(), json!([profile.photo_url]));
            obj.insert("is_online".into(), json!(is_online));
        }

        // The signup trigger normally creates the profile row; insert it when it did not
        if seeder.patch(&profile_path(&user_id), fields.clone()).is_some() {
            summary.profiles_updated += 1;
            seeder.ui.log(format!("{}: profile updated ({})", profile.name, short_id(&user_id)));
        } else {
            if let Some(obj) = fields.as_object_mut() {
                obj.insert("id".into(), json!(user_id));
                obj.insert("email".into(), json!(profile.email));
            }
            let inserted = seeder.post("/rest/v1/profiles", fields).is_some();
            if inserted {
                summary.profiles_inserted += 1;
            }
            seeder.ui.log(format!(
                "{}: profile insert {}",
                profile.name,
                if inserted { "ok" } else { "failed" }
            ));
        }

        summary.user_ids.push(user_id);
    }
    seeder.ui.clear_progress();

    seeder.ui.set_phase(Phase::Postings);
    let mut hosts: Vec<String> = summary.user_ids.iter().take(HOSTS_NEEDED).cloned().collect();
    if let Some(dev) = &dev_id {
        while hosts.len() < HOSTS_NEEDED {
            hosts.push(dev.clone());
        }
    }

    if hosts.is_empty() {
        tracing::warn!("no host accounts available, skipping postings");
    } else {
        for (i, join) in JOINS.iter().enumerate() {
            let host_id = hosts.get(i).unwrap_or(&hosts[0]).clone();
            let join_id = uuid::Uuid::new_v4().to_string();

            let body = json!({
                "id": join_id,
                "host_id": host_id,
                "title": join.title,
                "date": seeder.date_offset(join.days_ahead),
                "time": join.time,
                "location": join.location,
                "region": join.region,
                "course_name": join.course_name,
                "spots_total": join.spots_total,
                "spots_filled": join.spots_filled,
                "handicap_range": join.handicap_range,
                "styles": join.styles,
                "description": join.description,
                "meeting_type": join.meeting_type,
                "status": "open",
            });

            let created = seeder.post("/rest/v1/joins", body).is_some();
            seeder.ui.log(format!(
                "[{}/{}] {}: {}",
                i + 1,
                JOINS.len(),
                join.title,
                if created { "posted" } else { "failed" }
            ));
            if created {
                summary.postings += 1;
                seeder.post(
                    "/rest/v1/join_participants",
                    json!({"join_id": join_id, "user_id": host_id, "role": "host"}),
                );
            }
        }
    }

    seeder.ui.set_phase(Phase::Wallets);
    for user_id in summary.user_ids.clone() {
        let path = format!("/rest/v1/marker_wallets?user_id=eq.{}&select=id", user_id);
        let existing: Vec<Value> = seeder.get_rows(&path);
        if !existing.is_empty() {
            continue;
        }
        let wallet = json!({
            "user_id": user_id,
            "balance": STARTING_MARKERS,
            "total_purchased": 0,
            "total_spent": 0,
        });
        if seeder.post("/rest/v1/marker_wallets", wallet).is_some() {
            summary.wallets += 1;
            seeder.ui.log(format!("wallet created: {}", short_id(&user_id)));
        }
    }

    summary
}
