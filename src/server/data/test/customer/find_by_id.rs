use super::*;

/// Tests finding an existing customer by ID.
///
/// Verifies that the repository returns the customer with all fields
/// converted to the domain model.
///
/// Expected: Ok(Some(Customer))
#[tokio::test]
async fn finds_customer_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::customer::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    let customer = found.unwrap();
    assert_eq!(customer.id, created.id);
    assert_eq!(customer.email, created.email);

    Ok(())
}

/// Tests looking up a customer ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let found = repo.find_by_id(4242).await?;

    assert!(found.is_none());

    Ok(())
}
