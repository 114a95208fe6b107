use listing::resources::AdminUserList;
use payloads::{AdminUser, Listing};
use yew::prelude::*;

use super::{ResourceHandle, use_resource};

#[hook]
pub fn use_admin_users() -> ResourceHandle<Listing<AdminUser>> {
    use_resource::<AdminUserList>(())
}
