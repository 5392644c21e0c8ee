use super::math::{Ray, Vec3};

/// Solids that can report where a ray first meets them, as the parameter t
/// along the ray.
pub trait RayIntersectable {
    fn intersect(&self, ray: &Ray) -> Option<f64>;
}

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub color: Vec3,
}

#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub light: Light,
    pub background: Vec3,
}

impl RayIntersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        // only the near root is reported, and its sign is not checked: a
        // sphere behind the ray origin still counts as a hit
        Some((-b - discriminant.sqrt()) / (2.0 * a))
    }
}

impl Scene {
    /// The fixed demo scene: a yellow sphere half a unit wide, one unit in
    /// front of the camera, lit by a white point light.
    pub fn reference(light_position: Vec3) -> Scene {
        Scene {
            spheres: vec![Sphere {
                center: Vec3::new(0.0, 0.0, -1.0),
                radius: 0.5,
                color: Vec3::new(1.0, 1.0, 0.0),
            }],
            light: Light {
                position: light_position,
                color: Vec3::one(),
            },
            background: Vec3::zero(),
        }
    }

    pub fn with_light_position(&self, position: Vec3) -> Scene {
        let mut scene = self.clone();
        scene.light.position = position;
        scene
    }

    fn hit(&self, ray: &Ray) -> Option<(&Sphere, f64)> {
        let mut closest_t = f64::INFINITY;
        let mut closest_sphere = None;
        for sphere in &self.spheres {
            if let Some(t) = sphere.intersect(ray) {
                if t < closest_t {
                    closest_t = t;
                    closest_sphere = Some(sphere);
                }
            }
        }
        closest_sphere.map(|sphere| (sphere, closest_t))
    }

    /// Shades a primary ray: Lambertian diffuse on the nearest sphere, the
    /// background color on a miss. No ambient term and no shadow rays.
    pub fn shade(&self, ray: &Ray) -> Vec3 {
        match self.hit(ray) {
            Some((sphere, t)) => {
                let hit_point = ray.at(t);
                let normal = (hit_point - sphere.center).normalize();
                let light_dir = (self.light.position - hit_point).normalize();
                let diffuse = normal.dot(light_dir).max(0.0);
                sphere.color * self.light.color * diffuse
            }
            None => self.background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_ahead() -> Sphere {
        Sphere {
            center: Vec3::new(0.0, 0.0, -1.0),
            radius: 0.5,
            color: Vec3::new(1.0, 1.0, 0.0),
        }
    }

    #[test]
    fn head_on_ray_hits_the_near_surface() {
        let ray = Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(unit_sphere_ahead().intersect(&ray), Some(0.5));
    }

    #[test]
    fn sideways_ray_misses() {
        let ray = Ray::new(Vec3::zero(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(unit_sphere_ahead().intersect(&ray), None);
    }

    #[test]
    fn sphere_behind_the_origin_reports_a_negative_t() {
        // the near root is returned unchecked, so a sphere behind the ray
        // still produces a hit with t < 0
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(unit_sphere_ahead().intersect(&ray), Some(-2.5));
    }

    #[test]
    fn light_along_the_normal_gives_full_material_color() {
        // the ray hits at (0, 0, -0.5) with normal (0, 0, 1); a light
        // straight down that normal makes the diffuse term exactly one
        let scene = Scene::reference(Vec3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(scene.shade(&ray), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn light_behind_the_surface_shades_black() {
        let scene = Scene::reference(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(scene.shade(&ray), Vec3::zero());
    }

    #[test]
    fn missing_every_sphere_returns_the_background() {
        let scene = Scene::reference(Vec3::new(0.0, 1.0, 0.0));
        let ray = Ray::new(Vec3::zero(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(scene.shade(&ray), scene.background);
    }

    #[test]
    fn nearest_sphere_wins() {
        let mut scene = Scene::reference(Vec3::new(0.0, 0.0, 5.0));
        scene.spheres.push(Sphere {
            center: Vec3::new(0.0, 0.0, -2.0),
            radius: 0.5,
            color: Vec3::new(1.0, 0.0, 1.0),
        });
        let ray = Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, -1.0));
        // the front sphere is yellow and fully lit from the camera side
        assert_eq!(scene.shade(&ray), Vec3::new(1.0, 1.0, 0.0));
    }
}
