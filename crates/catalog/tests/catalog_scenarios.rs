use stockdash_catalog::{
    CatalogConfig, CatalogFilter, CatalogQueryEngine, CatalogStats, PriceRange, ProductDraft,
    ProductRecord, StockState, derive_pricing,
};
use stockdash_pricing::{
    MarkupRatio, MarkupUnit, StockHealth, classify_stock_health, compute_sale_price,
    compute_unit_profit,
};

fn engine() -> CatalogQueryEngine {
    stockdash_observability::init_for_tests();
    CatalogQueryEngine::default()
}

#[test]
fn out_of_stock_scenario() {
    let products = vec![
        ProductRecord::new(1, "P1", "Nueces").with_stock(0, 10).with_pricing(20.0, 0.3),
        ProductRecord::new(2, "P2", "Almendras").with_stock(50, 10).with_pricing(30.0, 0.25),
    ];
    let filter = CatalogFilter::all().with_stock_state(StockState::OutOfStock);

    let view = engine().query(&products, &filter).unwrap();

    assert_eq!(view.filtered.len(), 1);
    assert_eq!(view.filtered[0], &products[0]);
    assert_eq!(view.stats.out_of_stock_count, 1);
    assert_eq!(view.stats.total_inventory_value, 1500.0);
    assert_eq!(view.stats.total_count, 2);
    assert_eq!(view.stats.low_stock_count, 1);
}

#[test]
fn sale_price_scenario() {
    assert!((compute_sale_price(20.0, 0.30).unwrap() - 26.0).abs() < 1e-9);
    assert!((compute_unit_profit(20.0, 0.30).unwrap() - 6.0).abs() < 1e-9);
}

#[test]
fn stock_health_boundaries() {
    assert_eq!(classify_stock_health(1, 1), StockHealth::Critical);
    assert_eq!(classify_stock_health(5, 10), StockHealth::Low);
    assert_eq!(classify_stock_health(10, 10), StockHealth::Ok);
    assert_eq!(classify_stock_health(0, 5), StockHealth::Critical);
}

#[test]
fn empty_collection_scenario() {
    let engine = engine();
    for filter in [
        CatalogFilter::all(),
        CatalogFilter::all().with_search("x").with_price_range(PriceRange::High),
        CatalogFilter::all().with_stock_state(StockState::Low),
    ] {
        let view = engine.query(&[], &filter).unwrap();
        assert!(view.filtered.is_empty());
        assert_eq!(view.stats, CatalogStats::default());
    }
}

/// Legacy feed: markup stored in percent points, normalized once at ingestion.
#[test]
fn legacy_feed_is_normalized_at_ingestion() {
    let raw = r#"[
        {"id":1,"sku":"P0001","nombre":"Producto 1","stock_actual":100,"stock_minimo":20,
         "precio_compra_proveedor":50,"porcentaje_ganancia":30,
         "descripcion":"Descripción del producto 1","id_administrador":1},
        {"id":2,"sku":"P0002","nombre":"Producto 2","stock_actual":50,"stock_minimo":10,
         "precio_compra_proveedor":30,"porcentaje_ganancia":25,
         "descripcion":"Descripción del producto 2","id_administrador":1},
        {"id":3,"sku":"P0003","nombre":"Producto 3","stock_actual":30,"stock_minimo":5,
         "precio_compra_proveedor":20,"porcentaje_ganancia":15,
         "descripcion":"Descripción del producto 3","id_administrador":1}
    ]"#;

    let mut products: Vec<ProductRecord> = serde_json::from_str(raw).unwrap();
    for product in &mut products {
        product.markup_ratio = MarkupRatio::normalize(product.markup_ratio, MarkupUnit::PercentPoints)
            .unwrap()
            .as_fraction();
    }

    let prices: Vec<f64> = products
        .iter()
        .map(|p| derive_pricing(p).unwrap().sale_price)
        .collect();
    for (actual, expected) in prices.iter().zip([65.0, 37.5, 23.0]) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    let view = engine()
        .query(&products, &CatalogFilter::all().with_search("producto"))
        .unwrap();
    assert_eq!(view.filtered.len(), 3);
    assert_eq!(view.stats.low_stock_count, 0);
    assert_eq!(view.stats.total_inventory_value, 5000.0 + 1500.0 + 600.0);
}

#[test]
fn edited_product_flows_back_into_queries() {
    let config = CatalogConfig::from_json(r#"{"price_bands":{"low_below":50,"high_above":200}}"#)
        .unwrap();
    let engine = CatalogQueryEngine::new(config).unwrap();

    let original = ProductRecord::new(7, "P7", "Cafetera")
        .with_stock(3, 5)
        .with_pricing(40.0, 0.10);
    let mut draft = ProductDraft::from_record(&original);
    draft.supplier_cost = 100.0;
    draft.current_stock = 8;
    assert!(draft.is_modified(&original));

    let updated = draft.validate(&config.edit_limits).unwrap();
    let products = vec![updated];

    let medium = engine
        .query(&products, &CatalogFilter::all().with_price_range(PriceRange::Medium))
        .unwrap();
    assert_eq!(medium.filtered.len(), 1);

    let sufficient = engine
        .query(&products, &CatalogFilter::all().with_stock_state(StockState::Sufficient))
        .unwrap();
    assert_eq!(sufficient.filtered.len(), 1);
}

#[test]
fn view_serializes_for_the_rendering_layer() {
    let products = vec![
        ProductRecord::new(1, "P1", "Nueces").with_stock(0, 10).with_pricing(20.0, 0.3),
    ];
    let view = engine().query(&products, &CatalogFilter::all()).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["filtered"][0]["nombre"], "Nueces");
    assert_eq!(json["stats"]["out_of_stock_count"], 1);
}
