use super::*;

/// Tests listing transactions from an empty ledger.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_transactions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);
    let transactions = repo.get_all().await?;

    assert!(transactions.is_empty());

    Ok(())
}

/// Tests listing every recorded payment.
///
/// Expected: Ok with all created transactions
#[tokio::test]
async fn returns_all_transactions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let first = factory::transaction::create_transaction(db, reservation.id).await?;
    let second = factory::transaction::TransactionFactory::new(db, reservation.id)
        .amount(45.0)
        .payment_method("Cash")
        .build()
        .await?;

    let repo = TransactionRepository::new(db);
    let transactions = repo.get_all().await?;

    assert_eq!(transactions.len(), 2);
    let ids: Vec<i32> = transactions.iter().map(|t| t.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    Ok(())
}
