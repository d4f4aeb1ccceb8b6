use super::*;

/// Tests looking up a serviced guild.
///
/// Expected: Some(location) for the configured guild, None for any other
#[tokio::test]
async fn finds_configured_guild_only() -> Result<(), AppError> {
    let location = factory::service_location::ServiceLocationFactory::new()
        .guild_id("555")
        .access_role("7")
        .build();
    let test = TestBuilder::new()
        .with_service_location(location)
        .build()
        .unwrap();

    let store = ServiceLocationStore::new(test.configs_dir());
    store.reload().await?;

    let found = store.get(555).await.unwrap();
    assert_eq!(found.guild_id()?, 555);
    assert!(found.grants_command_access(&[1, 7]));
    assert!(!found.grants_command_access(&[1, 2]));
    assert!(store.get(556).await.is_none());

    Ok(())
}

/// Tests that clones of a store share the loaded set.
///
/// Expected: a reload through one clone is visible through the other
#[tokio::test]
async fn clones_share_locations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_service_location(
            factory::service_location::ServiceLocationFactory::new()
                .guild_id("666")
                .build(),
        )
        .build()
        .unwrap();

    let store = ServiceLocationStore::new(test.configs_dir());
    let clone = store.clone();
    store.reload().await?;

    assert!(clone.get(666).await.is_some());

    Ok(())
}
