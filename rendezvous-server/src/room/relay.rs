use crate::error::LobbyError;
use crate::room::RoomStore;
use rendezvous_core::{SignalPayload, SignalingState};
use tracing::debug;

// Signaling mailbox: one slot each for offer and answer, an append-only list
// for ICE candidates. None of these touch the public room view.
impl RoomStore {
    pub fn set_offer(&mut self, room_id: &str, payload: SignalPayload) -> Result<(), LobbyError> {
        let room = self.get_mut(room_id)?;
        if room.offer.replace(payload).is_some() {
            debug!(room = %room_id, "Offer overwritten");
        }
        Ok(())
    }

    pub fn set_answer(&mut self, room_id: &str, payload: SignalPayload) -> Result<(), LobbyError> {
        let room = self.get_mut(room_id)?;
        if room.answer.replace(payload).is_some() {
            debug!(room = %room_id, "Answer overwritten");
        }
        Ok(())
    }

    pub fn append_ice_candidate(
        &mut self,
        room_id: &str,
        payload: SignalPayload,
    ) -> Result<(), LobbyError> {
        let room = self.get_mut(room_id)?;
        room.ice_candidates.push(payload);
        Ok(())
    }

    pub fn signaling(&self, room_id: &str) -> Result<SignalingState, LobbyError> {
        let room = self
            .get(room_id)
            .ok_or_else(|| LobbyError::NotFound(room_id.into()))?;

        Ok(SignalingState {
            offer: room.offer.clone(),
            answer: room.answer.clone(),
            ice_candidates: room.ice_candidates.clone(),
        })
    }
}
