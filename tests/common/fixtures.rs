//! Static sheet payloads used across harnesses.

/// A small inventory export in the exact shape the sheet endpoint serves:
/// every cell is a string, empty cells are `""`, and the sheet carries one
/// bookkeeping column (`Timestamp`) that is not part of the product schema.
pub const CORPUS_SHEET: &str = r#"[
  {"BARCODE":"8991001","NAMA PRODUK":"Kopi Hitam Bubuk 165g","HBELI":"11500","HJUAL":"13500","MARGIN":"17.39","DIVISI":"Makanan","DEPARTEMEN":"Minuman Seduh","KATEGORI":"Kopi","SUBKATEGORI":"Kopi Bubuk","SUPPLIER":"PT Kapal Api","QTY TERJUAL":"120","QTY TERJUAL PERBULAN":"40","QTY TERJUAL  PERHARI":"1.33","STOK":"58","ITO":"1.45","Timestamp":"2024-05-01"},
  {"BARCODE":"8991002","NAMA PRODUK":"Teh Hijau Celup 25s","HBELI":"6200","HJUAL":"7500","MARGIN":"20.97","DIVISI":"Minuman","DEPARTEMEN":"Minuman Seduh","KATEGORI":"Teh","SUBKATEGORI":"Teh Celup","SUPPLIER":"PT Sariwangi","QTY TERJUAL":"95","QTY TERJUAL PERBULAN":"31","QTY TERJUAL  PERHARI":"1.03","STOK":"40","ITO":"2.38","Timestamp":"2024-05-01"},
  {"BARCODE":"8991003","NAMA PRODUK":"KOPI SUSU Sachet","HBELI":"1400","HJUAL":"1750","MARGIN":"25","DIVISI":"Minuman","DEPARTEMEN":"Minuman Seduh","KATEGORI":"Kopi","SUBKATEGORI":"Kopi Instan","SUPPLIER":"PT Kapal Api","QTY TERJUAL":"610","QTY TERJUAL PERBULAN":"203","QTY TERJUAL  PERHARI":"6.77","STOK":"300","ITO":"0.49","Timestamp":"2024-05-01"},
  {"BARCODE":"8991004","NAMA PRODUK":"Beras Pandan Wangi 5kg","HBELI":"68000","HJUAL":"74000","MARGIN":"8.82","DIVISI":"Makanan","DEPARTEMEN":"Sembako","KATEGORI":"Beras","SUBKATEGORI":"Beras Premium","SUPPLIER":"CV Tani Makmur","QTY TERJUAL":"44","QTY TERJUAL PERBULAN":"15","QTY TERJUAL  PERHARI":"0.49","STOK":"12","ITO":"3.67","Timestamp":"2024-05-02"},
  {"BARCODE":"8991005","NAMA PRODUK":"Minyak Goreng 2L","HBELI":"31000","HJUAL":"34500","MARGIN":"11.29","DIVISI":"Makanan","DEPARTEMEN":"Sembako","KATEGORI":"Minyak","SUBKATEGORI":"Minyak Sawit","SUPPLIER":"","QTY TERJUAL":"77","QTY TERJUAL PERBULAN":"26","QTY TERJUAL  PERHARI":"0.86","STOK":"25","ITO":"2.92","Timestamp":"2024-05-02"},
  {"BARCODE":"","NAMA PRODUK":"Sabun Mandi Batang","HBELI":"2900","HJUAL":"3500","MARGIN":"20.69","DIVISI":"Non Makanan","DEPARTEMEN":"Perawatan Diri","KATEGORI":"Sabun","SUBKATEGORI":"Sabun Batang","SUPPLIER":"PT Unilever","QTY TERJUAL":"150","QTY TERJUAL PERBULAN":"50","QTY TERJUAL  PERHARI":"1.67","STOK":"90","ITO":"1.8","Timestamp":"2024-05-03"},
  {"BARCODE":"8991007","NAMA PRODUK":"Teh Melati Tubruk","HBELI":"4100","HJUAL":"5000","MARGIN":"21.95","DIVISI":"Minuman","DEPARTEMEN":"Minuman Seduh","KATEGORI":"Teh","SUBKATEGORI":"Teh Tubruk","SUPPLIER":"PT Sariwangi","QTY TERJUAL":"33","QTY TERJUAL PERBULAN":"11","QTY TERJUAL  PERHARI":"0.37","STOK":"","ITO":"","Timestamp":"2024-05-03"}
]"#;

/// Number of rows in [`CORPUS_SHEET`].
pub const CORPUS_SHEET_LEN: usize = 7;

/// The sheet endpoint's answer when the API key is over quota: valid JSON,
/// wrong shape.
pub const QUOTA_ERROR_BODY: &str = r#"{"detail":"Monthly request limit exceeded"}"#;
