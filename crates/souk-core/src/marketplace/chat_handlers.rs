//! Chat list, conversation and group handlers for the Marketplace.

use log::info;

use super::{advance, submit, Marketplace};
use crate::{
    display::{ChatSummaries, Contacts, Conversation},
    error::{Result, SoukError},
    models::{FilterState, Group},
    params::{CreateGroup, Id, ListChats},
    wizard::{GroupPatch, GroupWizard, WizardFlow},
};

impl Marketplace {
    /// Chats whose name contains the search text, in catalog order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use souk_core::{params::ListChats, MarketplaceBuilder};
    /// let marketplace = MarketplaceBuilder::new().without_xdg().build().unwrap();
    /// let chats = marketplace.list_chats(&ListChats { search: "SARAH".to_string() });
    /// assert_eq!(chats.len(), 1);
    /// ```
    pub fn list_chats(&self, params: &ListChats) -> ChatSummaries {
        let filter = FilterState::search(params.search.as_str());
        let matcher = filter.matcher();
        ChatSummaries(
            self.catalog
                .chats()
                .iter()
                .filter(|chat| matcher.matches(*chat))
                .cloned()
                .collect(),
        )
    }

    /// The conversation view of one chat, with its shared product resolved.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::ChatNotFound` for an unknown id and
    /// `SoukError::ProductNotFound` if the shared product is missing.
    pub fn show_chat(&self, params: &Id) -> Result<Conversation> {
        let chat = self
            .catalog
            .chat(&params.id)
            .ok_or_else(|| SoukError::ChatNotFound {
                id: params.id.clone(),
            })?;

        let shared_product = chat
            .shared_product
            .as_deref()
            .map(|id| self.product(&Id { id: id.to_string() }).cloned())
            .transpose()?;

        Ok(Conversation {
            chat: chat.clone(),
            shared_product,
        })
    }

    /// Direct chats that can be added to a group.
    pub fn contacts(&self) -> Contacts {
        Contacts(self.catalog.contacts().cloned().collect())
    }

    /// A fresh group wizard over the catalog's contacts.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in wizard; the `Result` comes from
    /// [`WizardFlow::new`].
    pub fn group_wizard(&self) -> Result<WizardFlow<GroupWizard<'_>>> {
        WizardFlow::new(GroupWizard::new(self.catalog.chats()))
    }

    /// Runs the group wizard in one go.
    ///
    /// Unlike the interactive wizard, which silently skips ids it cannot
    /// select, every member id must name a direct chat.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::ChatNotFound` for an unknown member,
    /// `SoukError::InvalidInput` when a member is a group chat, and
    /// `SoukError::WizardIncomplete` when no member or no name is given.
    pub fn create_group(&self, params: &CreateGroup) -> Result<Group> {
        for id in &params.members {
            let chat = self
                .catalog
                .chat(id)
                .ok_or_else(|| SoukError::ChatNotFound { id: id.clone() })?;
            if !chat.is_direct() {
                return Err(SoukError::invalid_input("members")
                    .with_reason(format!("'{}' is a group chat", chat.name)));
            }
        }

        let mut flow = self.group_wizard()?;
        flow.update(GroupPatch::default().selected_members(params.members.iter()));
        advance(&mut flow)?;
        flow.update(GroupPatch::default().name(params.name.as_str()));
        let group = submit(&mut flow)?;

        info!(
            "Created group {} with {} members",
            group.id,
            group.member_ids.len()
        );
        Ok(group)
    }
}
