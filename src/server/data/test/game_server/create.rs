use super::*;

/// Tests creating a game server.
///
/// Verifies that the status is stored in its lowercase text form.
///
/// Expected: Ok with the server stored
#[tokio::test]
async fn creates_game_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GameServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = GameServerRepository::new(db)
        .create(CreateGameServerParam {
            name: "Cuddle Craft".to_string(),
            game: "Minecraft".to_string(),
            description: None,
            status: ServerStatus::Offline,
        })
        .await?;

    assert_eq!(server.name, "Cuddle Craft");
    assert_eq!(server.status, ServerStatus::Offline);

    let stored = entity::prelude::GameServer::find_by_id(server.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "offline");
    assert_eq!(stored.game, "Minecraft");

    Ok(())
}
