use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Tab {
    id: u32,
    label: String,
    open: bool,
    charges: u32,
}

#[derive(Debug)]
struct TabCreate {
    label: String,
}

#[derive(Debug)]
struct TabUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum TabAction {
    Charge(u32),
    Close,
}

#[derive(Debug)]
enum TabQuery {
    All,
    Open,
}

#[derive(Debug, thiserror::Error)]
enum TabError {
    #[error("tab is closed")]
    Closed,
}

#[async_trait]
impl ActorEntity for Tab {
    type Id = u32;
    type Create = TabCreate;
    type Update = TabUpdate;
    type Action = TabAction;
    type ActionResult = u32;
    type Query = TabQuery;
    type Context = ();
    type Error = TabError;

    fn from_create_params(id: u32, params: TabCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            open: true,
            charges: 0,
        })
    }

    fn matches(&self, query: &TabQuery) -> bool {
        match query {
            TabQuery::All => true,
            TabQuery::Open => self.open,
        }
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.label == other.label
    }

    async fn on_update(&mut self, update: TabUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if !self.open {
            return Err(TabError::Closed);
        }
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TabAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            TabAction::Charge(amount) => {
                if !self.open {
                    return Err(TabError::Closed);
                }
                self.charges += amount;
                Ok(self.charges)
            }
            TabAction::Close => {
                self.open = false;
                Ok(self.charges)
            }
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client
        .create(TabCreate {
            label: "window seat".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Perform Action: Charge
    let total: u32 = client.perform_action(id, TabAction::Charge(4)).await.unwrap();
    assert_eq!(total, 4);

    // Verify state
    let tab: Tab = client.get(id).await.unwrap().unwrap();
    assert_eq!(tab.charges, 4);

    // 3. Update
    let updated = client
        .update(
            id,
            TabUpdate {
                label: Some("terrace".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "terrace");

    // 4. Delete
    client.delete(id).await.unwrap();
    let deleted = client.get(id).await.unwrap();
    assert!(deleted.is_none());
}

#[tokio::test]
async fn test_find_filters_the_store() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let a = client.create(TabCreate { label: "a".into() }).await.unwrap();
    let _b = client.create(TabCreate { label: "b".into() }).await.unwrap();
    let c = client.create(TabCreate { label: "c".into() }).await.unwrap();

    client.perform_action(c, TabAction::Close).await.unwrap();

    let all = client.find(TabQuery::All).await.unwrap();
    assert_eq!(all.len(), 3);

    let mut open: Vec<u32> = client
        .find(TabQuery::Open)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    open.sort_unstable();
    assert_eq!(open, vec![a, 2]);
}

#[tokio::test]
async fn test_create_conflict_is_rejected() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    client
        .create(TabCreate { label: "bar".into() })
        .await
        .unwrap();
    let result = client.create(TabCreate { label: "bar".into() }).await;
    assert!(matches!(result, Err(FrameworkError::Conflict(_))));

    // The original survives untouched.
    let all = client.find(TabQuery::All).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_failed_hooks_leave_no_partial_state() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let id = client
        .create(TabCreate { label: "tab".into() })
        .await
        .unwrap();
    client.perform_action(id, TabAction::Charge(7)).await.unwrap();
    client.perform_action(id, TabAction::Close).await.unwrap();

    // Both mutation paths fail on a closed tab and must not commit anything.
    let update_result = client
        .update(
            id,
            TabUpdate {
                label: Some("renamed".into()),
            },
        )
        .await;
    assert!(matches!(update_result, Err(FrameworkError::EntityError(_))));

    let action_result = client.perform_action(id, TabAction::Charge(1)).await;
    assert!(matches!(action_result, Err(FrameworkError::EntityError(_))));

    let tab = client.get(id).await.unwrap().unwrap();
    assert_eq!(tab.label, "tab");
    assert_eq!(tab.charges, 7);
}

#[tokio::test]
async fn test_missing_id_is_not_found() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.perform_action(99, TabAction::Charge(1)).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(_))));

    let result = client.delete(99).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(_))));
}
