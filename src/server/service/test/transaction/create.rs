use super::*;

/// Tests recording a payment against a reservation.
///
/// Expected: Ok with the transaction created
#[tokio::test]
async fn records_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = TransactionService::new(db);
    let transaction = service
        .create(CreateTransactionParams {
            reservation_id: reservation.id,
            amount: 150.0,
            payment_method: "Credit Card".to_string(),
        })
        .await?;

    assert_eq!(transaction.reservation_id, reservation.id);
    assert_eq!(transaction.amount, 150.0);

    Ok(())
}

/// Tests recording a payment with a non-positive amount.
///
/// Expected: Err(AppError::InvalidArgument)
#[tokio::test]
async fn rejects_non_positive_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = TransactionService::new(db);
    let result = service
        .create(CreateTransactionParams {
            reservation_id: reservation.id,
            amount: 0.0,
            payment_method: "Cash".to_string(),
        })
        .await;

    let error = result.unwrap_err();
    match error {
        AppError::InvalidArgument(message) => assert_eq!(message, "Amount must be positive"),
        _ => panic!("Expected InvalidArgument, got: {:?}", error),
    }

    Ok(())
}

/// Tests recording a payment against a reservation that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TransactionService::new(db);
    let result = service
        .create(CreateTransactionParams {
            reservation_id: 999,
            amount: 80.0,
            payment_method: "Cash".to_string(),
        })
        .await;

    let error = result.unwrap_err();
    match error {
        AppError::NotFound(message) => assert_eq!(message, "Reservation not found"),
        _ => panic!("Expected NotFound, got: {:?}", error),
    }

    Ok(())
}
