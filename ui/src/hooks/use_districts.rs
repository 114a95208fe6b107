use listing::resources::{DistrictDetail, DistrictList};
use payloads::requests::DistrictQuery;
use payloads::{District, ItemId, Listing};
use yew::prelude::*;

use super::{ResourceHandle, use_resource};

#[hook]
pub fn use_districts(
    query: DistrictQuery,
) -> ResourceHandle<Listing<District>> {
    use_resource::<DistrictList>(query)
}

#[hook]
pub fn use_district(id: ItemId) -> ResourceHandle<District> {
    use_resource::<DistrictDetail>(id)
}
