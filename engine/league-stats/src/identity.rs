//! Roster and user identity lookups

use sleeper_client::{Roster, User};
use std::collections::HashMap;

/// roster_id -> owner_id. Unowned rosters map to `None`; a repeated roster id keeps the last entry.
pub fn map_roster_id_to_owner_id(rosters: &[Roster]) -> HashMap<String, Option<String>> {
    rosters.iter().map(|roster| (roster.roster_id.clone(), roster.owner_id.clone())).collect()
}

/// user_id -> display name
pub fn map_user_id_to_team_name(users: &[User]) -> HashMap<String, String> {
    users.iter().map(|user| (user.user_id.clone(), user.display_name.clone())).collect()
}
