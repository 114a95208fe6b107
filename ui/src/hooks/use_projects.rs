use listing::resources::{ProjectDetail, ProjectList};
use payloads::requests::ProjectScope;
use payloads::{ItemId, Listing, Project};
use yew::prelude::*;

use super::{ResourceHandle, use_resource};

#[hook]
pub fn use_projects(scope: ProjectScope) -> ResourceHandle<Listing<Project>> {
    use_resource::<ProjectList>(scope)
}

#[hook]
pub fn use_project(id: ItemId) -> ResourceHandle<Project> {
    use_resource::<ProjectDetail>(id)
}
