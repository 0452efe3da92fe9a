//! Presence toggle action - one badge read checks a maker in or out

use tracing::{debug, info};

use crate::domains::presence::data::{MakerData, ToggleAction, ToggleOutcome};
use crate::domains::presence::error::PresenceError;
use crate::domains::presence::events::ShopEvent;
use crate::domains::presence::models::{MakerPresence, MakerStatus};
use crate::kernel::ServerDeps;

/// Toggle a maker's presence from a badge read.
///
/// This action:
/// 1. Resolves the badge label to a maker
/// 2. No status row: check IN. Upsert an `idle` row and start the leave
///    cooldown
/// 3. Status row exists: check OUT. Refuse while the cooldown window is
///    open, otherwise delete the row and clear the cooldown
///
/// Broadcasts `maker_checked_in` or `maker_checked_out`.
pub async fn toggle_presence(
    deps: &ServerDeps,
    external_label: &str,
) -> Result<ToggleOutcome, PresenceError> {
    let maker = deps
        .store
        .find_maker_by_label(external_label)
        .await?
        .ok_or_else(|| {
            PresenceError::NotFound(format!("Maker with label '{external_label}' not found"))
        })?;

    let checked_in = deps.store.maker_status(maker.id).await?.is_some();

    if !checked_in {
        deps.store
            .upsert_maker_status(MakerStatus::idle(maker.id))
            .await?;
        deps.cooldowns.record(maker.id).await;

        let maker_data = MakerData::with_status(&maker, MakerPresence::Idle);
        deps.events.publish(ShopEvent::MakerCheckedIn {
            maker: maker_data.clone(),
        });
        info!(maker_id = %maker.id, display_name = %maker.display_name, "maker checked in");

        Ok(ToggleOutcome {
            action: ToggleAction::Login,
            maker: maker_data,
        })
    } else {
        if let Some(remaining) = deps
            .cooldowns
            .remaining(maker.id, deps.presence.leave_cooldown)
            .await
        {
            debug!(
                maker_id = %maker.id,
                remaining_secs = remaining.as_secs(),
                "check-out refused by cooldown"
            );
            return Err(PresenceError::CooldownActive {
                remaining_secs: remaining.as_secs(),
            });
        }

        deps.store.delete_maker_status(maker.id).await?;
        deps.cooldowns.clear(maker.id).await;

        let maker_data = MakerData::checked_out(&maker);
        deps.events.publish(ShopEvent::MakerCheckedOut {
            maker: maker_data.clone(),
        });
        info!(maker_id = %maker.id, display_name = %maker.display_name, "maker checked out");

        Ok(ToggleOutcome {
            action: ToggleAction::Leave,
            maker: maker_data,
        })
    }
}
