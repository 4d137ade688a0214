//! Identity sequence upkeep for writes that bring their own id.

use diesel::sql_query;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

/// Move the identity sequence of `table.id` past every stored id.
///
/// Caller supplied ids bypass the sequence; without this a later generated
/// id could land on an existing row. The sequence never moves backwards:
/// `nextval - 1` keeps its current position when that is already ahead.
pub(super) async fn advance_identity_sequence(
    conn: &mut AsyncPgConnection,
    table: &'static str,
) -> diesel::QueryResult<()> {
    sql_query(format!(
        "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
         GREATEST((SELECT MAX(id) FROM {table}), \
         nextval(pg_get_serial_sequence('{table}', 'id')) - 1))"
    ))
    .execute(conn)
    .await?;
    Ok(())
}
