/// Administrative district with its approximate centroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comuna {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn comuna(name: &'static str, latitude: f64, longitude: f64) -> Comuna {
    Comuna {
        name,
        latitude,
        longitude,
    }
}

pub const SANTIAGO_COMUNAS: [Comuna; 40] = [
    comuna("Las Condes", -33.4172, -70.5838),
    comuna("Providencia", -33.4269, -70.6103),
    comuna("Vitacura", -33.3820, -70.5754),
    comuna("Santiago Centro", -33.4489, -70.6693),
    comuna("Ñuñoa", -33.4564, -70.5989),
    comuna("La Reina", -33.4450, -70.5404),
    comuna("Maipú", -33.5115, -70.7581),
    comuna("Pudahuel", -33.4403, -70.7460),
    comuna("Cerrillos", -33.4974, -70.7093),
    comuna("Estación Central", -33.4596, -70.6989),
    comuna("La Florida", -33.5282, -70.5985),
    comuna("Puente Alto", -33.6110, -70.5756),
    comuna("San Miguel", -33.4969, -70.6513),
    comuna("La Cisterna", -33.5323, -70.6620),
    comuna("El Bosque", -33.5625, -70.6756),
    comuna("San Bernardo", -33.5926, -70.7009),
    comuna("Quilicura", -33.3608, -70.7342),
    comuna("Renca", -33.4044, -70.7212),
    comuna("Independencia", -33.4164, -70.6643),
    comuna("Recoleta", -33.4029, -70.6399),
    comuna("Conchalí", -33.3835, -70.6717),
    comuna("Huechuraba", -33.3695, -70.6369),
    comuna("Macul", -33.4850, -70.5990),
    comuna("Peñalolén", -33.4896, -70.5428),
    comuna("La Granja", -33.5383, -70.6220),
    comuna("San Joaquín", -33.4975, -70.6297),
    comuna("Pedro Aguirre Cerda", -33.4868, -70.6741),
    comuna("Lo Prado", -33.4440, -70.7243),
    comuna("Cerro Navia", -33.4236, -70.7417),
    comuna("Quinta Normal", -33.4345, -70.6937),
    comuna("Lo Espejo", -33.5225, -70.6897),
    comuna("San Ramón", -33.5363, -70.6481),
    comuna("La Pintana", -33.5833, -70.6344),
    comuna("Lo Barnechea", -33.3486, -70.5091),
    comuna("Colina", -33.2017, -70.6755),
    comuna("Lampa", -33.2896, -70.8780),
    comuna("Talagante", -33.6631, -70.9294),
    comuna("Buin", -33.7326, -70.7429),
    comuna("Paine", -33.8124, -70.7439),
    comuna("Melipilla", -33.6875, -71.2148),
];
