use anyhow::Context;

use crate::constants::{API_NAME, IMAGES_PATH};
use crate::models::{Car, CarUpdate, NewCar};
use crate::repository::CarRepository;
use crate::service::ImageStore;

/// Car catalog operations. Cars come out of the repository with a bare
/// image filename; every read path rewrites it into an absolute URL
/// under the configured public base.
#[derive(Clone)]
pub struct CarCatalogService {
    repo: CarRepository,
    images: ImageStore,
    public_base_url: String,
}

impl CarCatalogService {
    pub fn new(repo: CarRepository, images: ImageStore, public_base_url: String) -> Self {
        Self {
            repo,
            images,
            public_base_url,
        }
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    pub async fn list_cars(&self) -> anyhow::Result<Vec<Car>> {
        let cars = self.repo.list().await.context("Failed to fetch cars")?;
        Ok(cars.into_iter().map(|c| self.with_image_url(c)).collect())
    }

    pub async fn get_car(&self, id: i64) -> anyhow::Result<Option<Car>> {
        let car = self
            .repo
            .find_by_id(id, None)
            .await
            .context("Failed to fetch car")?;
        Ok(car.map(|c| self.with_image_url(c)))
    }

    pub async fn create_car(
        &self,
        car: NewCar,
        original_filename: &str,
        image_bytes: &[u8],
    ) -> anyhow::Result<Car> {
        let stored = self.images.store(original_filename, image_bytes).await?;

        let created = self
            .repo
            .create(&car, &stored)
            .await
            .context("Failed to insert car")?;

        tracing::info!("{} Created car {} ({})", API_NAME, created.id, created.name);
        Ok(self.with_image_url(created))
    }

    /// Full five-field overwrite. Returns false when no row matched.
    pub async fn update_car(&self, id: i64, car: &CarUpdate) -> anyhow::Result<bool> {
        let rows = self
            .repo
            .update(id, car)
            .await
            .context("Failed to update car")?;
        Ok(rows > 0)
    }

    /// Deletes by id with no referential check against rentals; historical
    /// bookings keep their own snapshot of the car.
    pub async fn delete_car(&self, id: i64) -> anyhow::Result<bool> {
        let rows = self.repo.delete(id).await.context("Failed to delete car")?;
        if rows > 0 {
            tracing::info!("{} Deleted car {}", API_NAME, id);
        }
        Ok(rows > 0)
    }

    fn with_image_url(&self, mut car: Car) -> Car {
        car.img = image_url(&self.public_base_url, &car.img);
        car
    }
}

fn image_url(base: &str, filename: &str) -> String {
    format!("{}{}/{}", base.trim_end_matches('/'), IMAGES_PATH, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_joins_base_and_filename() {
        assert_eq!(
            image_url("http://localhost:5001", "civic_42.png"),
            "http://localhost:5001/images/civic_42.png"
        );
    }

    #[test]
    fn image_url_tolerates_trailing_slash() {
        assert_eq!(
            image_url("https://rentals.example.com/", "civic_42.png"),
            "https://rentals.example.com/images/civic_42.png"
        );
    }
}
