use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::board::validation::validate;
use crate::models::{Draft, DraftField, Listing, ValidationErrors};

/// What happened to a submitted draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new listing was appended to the board
    Created(Uuid),
    /// The draft quantity was added to an existing listing with the same
    /// name and location
    Merged { id: Uuid, quantity: u32 },
    /// Validation failed; `errors()` holds the per-field messages
    Rejected,
    /// Name or location was empty, nothing was recorded
    Incomplete,
}

/// In-memory store for food listings and the pending draft
///
/// Owned by the composition root and called synchronously from UI event
/// handlers. Listings are kept in insertion order; nothing is ever deleted,
/// a claimed-out listing just drops out of the available view.
#[derive(Debug, Default)]
pub struct ListingBoard {
    listings: Vec<Listing>,
    draft: Draft,
    errors: ValidationErrors,
}

impl ListingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Every listing on the board, depleted ones included
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Set a draft text field. Editing location or contact clears that
    /// field's validation message, so the form stops nagging while the user
    /// types.
    pub fn update_field(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Name => self.draft.name = value.to_string(),
            DraftField::Description => self.draft.description = value.to_string(),
            DraftField::Location => {
                self.draft.location = value.to_string();
                self.errors.location.clear();
            }
            DraftField::Contact => {
                self.draft.contact = value.to_string();
                self.errors.contact.clear();
            }
        }
    }

    /// Parse a raw quantity input. Anything that is not an integer of at
    /// least 1 becomes 1, so the draft never holds a bogus quantity.
    pub fn update_quantity(&mut self, raw: &str) {
        self.draft.quantity = raw.trim().parse::<u32>().map_or(1, |q| q.max(1));
        debug!("Draft quantity set to {}", self.draft.quantity);
    }

    /// Submit the pending draft.
    ///
    /// Validation failures leave the board untouched and surface through
    /// `errors()`. A draft whose name and location match an existing listing
    /// (case-insensitively) merges into it instead of creating a duplicate.
    /// On success the draft resets to its defaults.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            warn!(
                "Submission rejected: contact='{}' location='{}'",
                self.errors.contact, self.errors.location
            );
            return SubmitOutcome::Rejected;
        }

        if self.draft.name.is_empty() || self.draft.location.is_empty() {
            debug!("Submission skipped: name or location empty");
            return SubmitOutcome::Incomplete;
        }

        let draft = std::mem::take(&mut self.draft);

        let existing = self.listings.iter_mut().find(|listing| {
            listing.name.to_lowercase() == draft.name.to_lowercase()
                && listing.location.to_lowercase() == draft.location.to_lowercase()
        });

        match existing {
            Some(listing) => {
                listing.quantity = listing.quantity.saturating_add(draft.quantity);
                info!(
                    "Merged {} portions into '{}' at {} (now {})",
                    draft.quantity, listing.name, listing.location, listing.quantity
                );
                SubmitOutcome::Merged {
                    id: listing.id,
                    quantity: listing.quantity,
                }
            }
            None => {
                let listing = Listing {
                    id: Uuid::new_v4(),
                    name: draft.name,
                    description: draft.description,
                    location: draft.location,
                    contact: draft.contact,
                    quantity: draft.quantity,
                    created_at: Utc::now(),
                };
                let id = listing.id;
                info!(
                    "New listing '{}' at {} ({} portions)",
                    listing.name, listing.location, listing.quantity
                );
                self.listings.push(listing);
                SubmitOutcome::Created(id)
            }
        }
    }

    /// Claim one portion of a listing. Returns true when a portion was
    /// actually taken; a depleted or unknown listing is a silent no-op.
    pub fn claim(&mut self, id: Uuid) -> bool {
        match self.listings.iter_mut().find(|listing| listing.id == id) {
            Some(listing) if listing.quantity > 0 => {
                listing.quantity -= 1;
                debug!(
                    "Claimed one portion of '{}' ({} left)",
                    listing.name, listing.quantity
                );
                true
            }
            _ => {
                debug!("Claim ignored for {}", id);
                false
            }
        }
    }

    /// Listings that still have portions, in insertion order
    pub fn available_listings(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter().filter(|listing| listing.quantity > 0)
    }
}
