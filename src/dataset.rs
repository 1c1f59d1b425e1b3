//! Lectura del CSV de reseñas con `arrow::csv`.
//!
//! El esquema se infiere del fichero completo. La columna `review` es
//! obligatoria y `rating` opcional; cualquier otra columna (incluida `id`)
//! se ignora. Se devuelven todas las filas o un error, nunca un resultado
//! parcial.

use std::{
    fs::File,
    io::{ErrorKind, Seek},
    path::Path,
    sync::Arc,
};

use arrow::{
    array::{Array, AsArray},
    compute::cast,
    csv::{reader::Format, ReaderBuilder},
    datatypes::{DataType, Float64Type},
    error::ArrowError,
    record_batch::RecordBatch,
};
use tracing::debug;

use crate::{
    error::DatasetError,
    models::{finite, ReviewRow},
};

pub const REVIEW_COLUMN: &str = "review";
pub const RATING_COLUMN: &str = "rating";

const BATCH_SIZE: usize = 1024;

/// Carga todas las reseñas del fichero, en orden.
pub fn load_reviews(path: &Path) -> Result<Vec<ReviewRow>, DatasetError> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
        _ => DatasetError::Io(e),
    })?;

    let format = Format::default().with_header(true);
    let (schema, records) = format.infer_schema(&mut file, None)?;
    file.rewind()?;

    if schema.column_with_name(REVIEW_COLUMN).is_none() {
        return Err(DatasetError::MissingColumn(REVIEW_COLUMN));
    }
    debug!(
        "Esquema inferido: {} columnas, {} filas, rating={}",
        schema.fields().len(),
        records,
        schema.column_with_name(RATING_COLUMN).is_some()
    );

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_batch_size(BATCH_SIZE)
        .with_format(format)
        .build(file)?;

    let mut rows = Vec::with_capacity(records);
    for batch in reader {
        rows.extend(rows_from_batch(&batch?)?);
    }
    Ok(rows)
}

/// Convierte un `RecordBatch` en filas tipadas.
fn rows_from_batch(batch: &RecordBatch) -> Result<Vec<ReviewRow>, DatasetError> {
    let review_col = batch
        .column_by_name(REVIEW_COLUMN)
        .ok_or(DatasetError::MissingColumn(REVIEW_COLUMN))?;
    // Cualquier tipo inferido (números, booleanos...) se lee como texto.
    let reviews = cast(review_col, &DataType::Utf8)?;
    let reviews = reviews
        .as_string_opt::<i32>()
        .ok_or_else(|| ArrowError::CastError("review column is not Utf8".to_string()))?;

    // Valores no numéricos quedan como null tras el cast.
    let ratings = match batch.column_by_name(RATING_COLUMN) {
        Some(col) => Some(cast(col, &DataType::Float64)?),
        None => None,
    };
    let ratings = match &ratings {
        Some(array) => Some(
            array
                .as_primitive_opt::<Float64Type>()
                .ok_or_else(|| ArrowError::CastError("rating column is not Float64".to_string()))?,
        ),
        None => None,
    };

    let rows = (0..batch.num_rows())
        .map(|i| {
            let review = if reviews.is_null(i) {
                String::new()
            } else {
                reviews.value(i).to_string()
            };
            let rating = ratings
                .filter(|r| !r.is_null(i))
                .and_then(|r| finite(r.value(i)));
            ReviewRow { review, rating }
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample_reviews.csv");
        let err = load_reviews(&path).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn missing_review_column_is_rejected() {
        let file = csv_file("id,text,rating\n1,great,5\n");
        let err = load_reviews(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("review")));
    }

    #[test]
    fn empty_file_has_no_review_column() {
        let file = csv_file("");
        let err = load_reviews(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(_)));
    }

    #[test]
    fn reads_reviews_and_ratings_in_order() {
        let file = csv_file("id,review,rating\n10,Great product,5\n20,Awful,1\n30,It is fine,3\n");
        let rows = load_reviews(file.path()).unwrap();
        assert_eq!(
            rows,
            vec![
                ReviewRow { review: "Great product".to_string(), rating: Some(5.0) },
                ReviewRow { review: "Awful".to_string(), rating: Some(1.0) },
                ReviewRow { review: "It is fine".to_string(), rating: Some(3.0) },
            ]
        );
    }

    #[test]
    fn rating_column_is_optional() {
        let file = csv_file("review\nNice\nBad\n");
        let rows = load_reviews(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.rating.is_none()));
    }

    #[test]
    fn missing_and_unparseable_ratings_become_none() {
        let file = csv_file("review,rating\na,4.5\nb,\nc,n/a\nd,NaN\n");
        let rows = load_reviews(file.path()).unwrap();
        let ratings: Vec<Option<f64>> = rows.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![Some(4.5), None, None, None]);
    }

    #[test]
    fn missing_review_text_becomes_empty_string() {
        let file = csv_file("review,rating\nGood,5\n,2\n\"Quoted, with comma\",4\n");
        let rows = load_reviews(file.path()).unwrap();
        assert_eq!(rows[0].review, "Good");
        assert_eq!(rows[1].review, "");
        assert_eq!(rows[2].review, "Quoted, with comma");
    }

    #[test]
    fn numeric_reviews_are_read_as_text() {
        let file = csv_file("review\n42\n7\n");
        let rows = load_reviews(file.path()).unwrap();
        assert_eq!(rows[0].review, "42");
        assert_eq!(rows[1].review, "7");
    }

    #[test]
    fn ragged_rows_fail_the_whole_load() {
        let file = csv_file("review,rating\nok,5\nbroken,1,extra,fields\n");
        let err = load_reviews(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }
}
