use sales_dash::records::{ingest_str, Price};
use sales_dash::utils::RecordError;

const PAYLOAD: &str = r#"[
    {"Produto": "Celular Plus X42", "Categoria do Produto": "eletronicos", "Preço": 3019.43,
     "Frete": 158.2, "Data da Compra": "12/02/2022", "Vendedor": "Beatriz Moraes",
     "Local da compra": "SP", "Avaliação da compra": 4, "Tipo de pagamento": "cartao_credito",
     "Quantidade de parcelas": 10, "lat": -22.19, "lon": -48.79},
    {"Produto": "Bola de basquete", "Categoria do Produto": "esporte e lazer", "Preço": 58.4,
     "Frete": 1.2, "Data da Compra": "31/02/2022", "Vendedor": "Rafael Costa",
     "Local da compra": "RJ", "Avaliação da compra": 5, "Tipo de pagamento": "boleto",
     "Quantidade de parcelas": 1, "lat": -22.25, "lon": -42.66},
    {"Produto": "Cadeira de escritório", "Categoria do Produto": "moveis", "Preço": "n/a",
     "Frete": 10.0, "Data da Compra": "01/03/2022", "Vendedor": "Rafael Costa",
     "Local da compra": "MG", "lat": -18.1, "lon": -44.38},
    {"Produto": "Jogo de tabuleiro", "Categoria do Produto": "brinquedos", "Preço": 112.9,
     "Frete": 5.5, "Data da Compra": "05/04/2022", "Vendedor": "Lucas Oliveira",
     "Local da compra": "BA", "lat": -13.29, "lon": -41.71}
]"#;

#[test]
fn test_batch_keeps_valid_records() {
    let report = ingest_str(PAYLOAD).unwrap();

    assert_eq!(report.total_rows(), 4);
    assert_eq!(report.records.len(), 2);

    let states: Vec<&str> = report.records.iter().map(|r| r.state.as_str()).collect();
    assert_eq!(states, vec!["SP", "BA"]);
    assert_eq!(report.records[0].price, Price::from_cents(301943));
    assert_eq!(report.records[0].payment_type.as_deref(), Some("cartao_credito"));
}

#[test]
fn test_rejections_carry_row_and_reason() {
    let report = ingest_str(PAYLOAD).unwrap();

    assert_eq!(report.rejected.len(), 2);
    assert_eq!(
        report.rejected[0],
        RecordError::InvalidDateFormat { row: 1, value: "31/02/2022".to_string() }
    );
    assert_eq!(
        report.rejected[1],
        RecordError::InvalidPrice { row: 2, value: "n/a".to_string() }
    );
    assert_eq!(report.rejected[1].row(), 2);

    let stats = report.stats();
    assert_eq!((stats.total_rows, stats.accepted, stats.rejected), (4, 2, 2));
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(ingest_str("{not json").is_err());
}
