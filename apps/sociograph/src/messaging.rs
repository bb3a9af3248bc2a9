//! # Messaging Workflow
//!
//! Sending a message between two users. If they are not friends yet, the
//! workflow befriends them first with the configured default weight. This
//! policy lives here, on top of the engine's plain `add_edge`; the engine
//! itself never creates edges on its own.

use crate::error::AppError;
use sociograph_core::{EdgeWeight, GraphError, GraphStore, Message, VertexId};

/// What happened when a message was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// True if the sender and receiver were befriended by this message.
    pub befriended: bool,
}

/// Deliver `body` from `sender` to `receiver`.
///
/// Both users must exist and be distinct. Checks happen before any
/// mutation, so a rejected message leaves the graph untouched.
pub fn send_message<G: GraphStore + ?Sized>(
    graph: &mut G,
    sender: &VertexId,
    receiver: &VertexId,
    body: &str,
    default_weight: EdgeWeight,
) -> Result<Delivery, AppError> {
    if !graph.has_vertex(sender) {
        return Err(GraphError::VertexNotFound(sender.clone()).into());
    }
    if !graph.has_vertex(receiver) {
        return Err(GraphError::VertexNotFound(receiver.clone()).into());
    }
    if sender == receiver {
        return Err(AppError::SelfMessage(sender.clone()));
    }

    let befriended = if graph.are_adjacent(sender, receiver) {
        false
    } else {
        graph.add_edge(sender, receiver, default_weight)?.is_inserted()
    };

    if befriended {
        tracing::info!(
            "Friendship automatically added between {} and {} (weight {})",
            sender,
            receiver,
            default_weight
        );
    }

    graph.deliver(receiver, Message::new(sender.clone(), body))?;
    tracing::info!("Message sent from {} to {}", sender, receiver);

    Ok(Delivery { befriended })
}
