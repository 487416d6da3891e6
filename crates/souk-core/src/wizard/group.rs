//! The "new group" wizard: pick members, then name the group.

use std::fmt;

use crate::models::{Chat, Group};

use super::{generate_id, WizardSpec};

/// Steps of the group wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStep {
    Select,
    Name,
}

impl GroupStep {
    pub const ALL: [GroupStep; 2] = [GroupStep::Select, GroupStep::Name];

    pub fn label(&self) -> &'static str {
        match self {
            GroupStep::Select => "Add members",
            GroupStep::Name => "New group",
        }
    }
}

impl fmt::Display for GroupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupStep::Select => "select",
            GroupStep::Name => "name",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDraft {
    /// Chat ids of the chosen members, in selection order
    pub selected_members: Vec<String>,
    pub name: String,
}

impl GroupDraft {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_members.iter().any(|m| m == id)
    }
}

/// Partial update of a [`GroupDraft`].
#[derive(Debug, Clone, Default)]
pub struct GroupPatch {
    /// Replaces the selection
    pub selected_members: Option<Vec<String>>,
    /// Adds the member if absent, removes it if present
    pub toggle_member: Option<String>,
    pub name: Option<String>,
}

impl GroupPatch {
    pub fn selected_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_members = Some(members.into_iter().map(Into::into).collect());
        self
    }

    pub fn toggle_member(mut self, id: impl Into<String>) -> Self {
        self.toggle_member = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Group wizard over the direct contacts of the chat list.
#[derive(Debug, Clone)]
pub struct GroupWizard<'a> {
    contacts: Vec<&'a Chat>,
}

impl<'a> GroupWizard<'a> {
    /// Only direct chats from `chats` can be added as members. Other ids
    /// stay in the draft but hold the select gate shut.
    pub fn new(chats: &'a [Chat]) -> Self {
        Self {
            contacts: chats.iter().filter(|c| c.is_direct()).collect(),
        }
    }

    pub fn contacts(&self) -> &[&'a Chat] {
        &self.contacts
    }

    pub fn contact(&self, id: &str) -> Option<&'a Chat> {
        self.contacts.iter().copied().find(|c| c.id == id)
    }

    /// First selected id that is not a direct contact.
    pub fn stranger<'d>(&self, draft: &'d GroupDraft) -> Option<&'d str> {
        draft
            .selected_members
            .iter()
            .map(String::as_str)
            .find(|id| self.contact(id).is_none())
    }
}

impl WizardSpec for GroupWizard<'_> {
    type Step = GroupStep;
    type Draft = GroupDraft;
    type Patch = GroupPatch;
    type Record = Group;

    fn steps(&self) -> &'static [GroupStep] {
        &GroupStep::ALL
    }

    fn can_advance(&self, step: GroupStep, draft: &GroupDraft) -> bool {
        match step {
            GroupStep::Select => {
                !draft.selected_members.is_empty() && self.stranger(draft).is_none()
            }
            GroupStep::Name => !draft.name.trim().is_empty(),
        }
    }

    fn explain(&self, step: GroupStep, draft: &GroupDraft) -> Option<String> {
        if self.can_advance(step, draft) {
            return None;
        }
        Some(match step {
            GroupStep::Select => match self.stranger(draft) {
                Some(id) => format!("'{id}' is not a direct contact"),
                None => "select at least one member".to_string(),
            },
            GroupStep::Name => "the group needs a name".to_string(),
        })
    }

    fn apply(&self, draft: &mut GroupDraft, patch: GroupPatch) {
        if let Some(members) = patch.selected_members {
            draft.selected_members.clear();
            for id in members {
                if !draft.is_selected(&id) {
                    draft.selected_members.push(id);
                }
            }
        }
        if let Some(id) = patch.toggle_member {
            if draft.is_selected(&id) {
                draft.selected_members.retain(|m| *m != id);
            } else {
                draft.selected_members.push(id);
            }
        }
        if let Some(name) = patch.name {
            draft.name = name;
        }
    }

    fn finalize(&self, draft: &GroupDraft) -> Group {
        Group {
            id: generate_id("group"),
            name: draft.name.trim().to_string(),
            member_ids: draft.selected_members.clone(),
        }
    }
}
