use steward_model::Users;

use crate::widgets::PaddleClick;

#[derive(Clone, Debug)]
pub enum Message {
    /// Grant system administrator privilege to every user in the collection
    MakeAdmin(Users, PaddleClick),
    /// Revoke system administrator privilege from every user in the collection
    RemoveAdmin(Users, PaddleClick),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MakeAdmin(..) => "Users::MakeAdmin",
            Self::RemoveAdmin(..) => "Users::RemoveAdmin",
        }
    }
}
