/// Трейт для корня агрегата
///
/// Связывает агрегат с его индексом и таблицей в БД
pub trait AggregateRoot {
    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для БД (например, "profit_distribution_config")
    fn collection_name() -> &'static str;

    /// Полное имя агрегата, оно же имя таблицы (например, "a001_profit_distribution_config")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
