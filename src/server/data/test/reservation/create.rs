use super::*;

/// Tests creating a new reservation.
///
/// Verifies that the repository inserts the reservation linking the customer
/// and room with the given dates and cost, and that it can be read back by ID.
///
/// Expected: Ok with reservation created
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let room = factory::room::create_room(db).await?;

    let check_in_date = Utc::now();
    let check_out_date = check_in_date + Duration::days(3);

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(customer.id, room.id, check_in_date, check_out_date, 300.0)
        .await?;

    assert!(reservation.id > 0);
    assert_eq!(reservation.customer_id, customer.id);
    assert_eq!(reservation.room_id, room.id);
    assert_eq!(reservation.total_cost, 300.0);

    let found = repo.find_by_id(reservation.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().check_out_date, check_out_date);

    Ok(())
}
